pub mod prompts;
pub mod render;

pub use prompts::{build_drink_interactively, prompt_coffee, prompt_condiment};
pub use render::{display_drink, display_menu, format_error, format_price, write_menu_csv};
