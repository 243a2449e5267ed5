use dialoguer::Select;

use crate::error::Result;
use crate::interface::render::format_price;
use crate::menu::{OrderBuilder, OrderItem};
use crate::models::{Beverage, Coffee, Condiment, Drink};

/// Prompt for the base coffee.
pub fn prompt_coffee() -> Result<Coffee> {
    let options: Vec<String> = Coffee::ALL
        .iter()
        .map(|c| format!("{} ({})", c.label(), format_price(c.price_cents())))
        .collect();

    let selection = Select::new()
        .with_prompt("Pick a coffee")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Coffee::ALL[selection])
}

/// Prompt for the next condiment. `None` means the customer is done.
pub fn prompt_condiment(current: &Drink) -> Result<Option<Condiment>> {
    let mut options: Vec<String> = Condiment::ALL
        .iter()
        .map(|c| format!("+ {} ({})", c.label(), format_price(c.price_cents())))
        .collect();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt(format!("{} - add a condiment?", current))
        .items(&options)
        .default(options.len() - 1)
        .interact()?;

    Ok(Condiment::ALL.get(selection).copied())
}

/// Walk the customer through a coffee and any number of condiments.
pub fn build_drink_interactively() -> Result<Drink> {
    let mut builder = OrderBuilder::new();
    builder.push(OrderItem::Coffee(prompt_coffee()?))?;

    while let Some(current) = builder.current() {
        let Some(condiment) = prompt_condiment(current)? else {
            break;
        };
        builder.push(OrderItem::Condiment(condiment))?;
        println!("Added: {}", condiment);
    }

    let drink = builder.finish()?;
    tracing::debug!(layers = drink.depth(), cents = drink.cost_cents(), "interactive order done");
    Ok(drink)
}
