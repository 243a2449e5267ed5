pub mod constants;
pub mod demo;
pub mod lookup;
pub mod order;
pub mod random;
pub mod receipt;

pub use constants::*;
pub use demo::house_orders;
pub use lookup::{lookup_item, normalize};
pub use order::{parse_order, parse_order_line, OrderBuilder, OrderItem};
pub use random::{random_drink, surprise};
pub use receipt::Receipt;
