use tracing::info;

use crate::error::{CoffeeError, Result};
use crate::menu::lookup::lookup_item;
use crate::models::{Beverage, Coffee, Condiment, CondimentDecorator, Drink};

/// One line of an order as typed by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderItem {
    Coffee(Coffee),
    Condiment(Condiment),
}

impl OrderItem {
    pub fn label(self) -> &'static str {
        match self {
            OrderItem::Coffee(coffee) => coffee.label(),
            OrderItem::Condiment(condiment) => condiment.label(),
        }
    }
}

/// Folds order items into a drink: one coffee first, then condiments outward.
#[derive(Debug, Default)]
pub struct OrderBuilder {
    drink: Option<Drink>,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the next item.
    ///
    /// A condiment with no coffee underneath and a second coffee are both
    /// rejected with `InvalidArgument`; the builder is left unchanged.
    pub fn push(&mut self, item: OrderItem) -> Result<()> {
        match item {
            OrderItem::Coffee(coffee) => {
                if let Some(existing) = &self.drink {
                    return Err(CoffeeError::InvalidArgument(format!(
                        "order already has {}, cannot add {}",
                        existing.coffee(),
                        coffee
                    )));
                }
                self.drink = Some(coffee.into());
            }
            OrderItem::Condiment(condiment) => {
                let decorated = CondimentDecorator::try_new(condiment, self.drink.take())?;
                self.drink = Some(decorated.into());
            }
        }
        Ok(())
    }

    /// The drink built so far, if a coffee has been chosen.
    pub fn current(&self) -> Option<&Drink> {
        self.drink.as_ref()
    }

    pub fn finish(self) -> Result<Drink> {
        self.drink.ok_or(CoffeeError::EmptyOrder)
    }
}

/// Build a drink from item names: a coffee, then condiments in the order given.
pub fn parse_order<S: AsRef<str>>(items: &[S]) -> Result<Drink> {
    let mut builder = OrderBuilder::new();
    for raw in items {
        builder.push(lookup_item(raw.as_ref())?)?;
    }
    let drink = builder.finish()?;

    info!(
        description = %drink.description(),
        cents = drink.cost_cents(),
        "order parsed"
    );
    Ok(drink)
}

/// Build a drink from a comma-separated line such as
/// `"Dark Roast Coffee, Chocolate, Whipped Cream"`.
pub fn parse_order_line(line: &str) -> Result<Drink> {
    let items: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    parse_order(&items)
}
