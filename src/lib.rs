pub mod cli;
pub mod error;
pub mod interface;
pub mod menu;
pub mod models;

pub use error::{CoffeeError, Result};
pub use models::{Beverage, Coffee, Condiment, CondimentDecorator, Drink};
