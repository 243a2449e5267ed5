mod beverage;
mod coffee;
mod condiment;
mod drink;

pub use beverage::Beverage;
pub use coffee::Coffee;
pub use condiment::{Condiment, CondimentDecorator};
pub use drink::Drink;
