use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoffeeError, Result};
use crate::menu::constants::{
    CHOCOLATE_CENTS, SOY_MILK_CENTS, WHIPPED_CREAM_CENTS, WHOLE_MILK_CENTS,
};
use crate::models::{Beverage, Coffee, Drink};

/// An add-on that can be stacked on any drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condiment {
    SoyMilk,
    WholeMilk,
    Chocolate,
    WhippedCream,
}

impl Condiment {
    /// Every condiment on the menu, in menu order.
    pub const ALL: [Condiment; 4] = [
        Condiment::SoyMilk,
        Condiment::WholeMilk,
        Condiment::Chocolate,
        Condiment::WhippedCream,
    ];

    /// Name shown on menus and appended to orders.
    pub fn label(self) -> &'static str {
        match self {
            Condiment::SoyMilk => "Soy Milk",
            Condiment::WholeMilk => "Whole Milk",
            Condiment::Chocolate => "Chocolate",
            Condiment::WhippedCream => "Whipped Cream",
        }
    }

    /// Text appended to the wrapped drink's description.
    pub fn suffix(self) -> String {
        format!(", {}", self.label())
    }

    /// Surcharge in cents.
    pub fn price_cents(self) -> u32 {
        match self {
            Condiment::SoyMilk => SOY_MILK_CENTS,
            Condiment::WholeMilk => WHOLE_MILK_CENTS,
            Condiment::Chocolate => CHOCOLATE_CENTS,
            Condiment::WhippedCream => WHIPPED_CREAM_CENTS,
        }
    }

    /// Names a customer may use for this condiment.
    pub fn aliases(self) -> [&'static str; 2] {
        match self {
            Condiment::SoyMilk => ["Soy Milk", "Soy"],
            Condiment::WholeMilk => ["Whole Milk", "Milk"],
            Condiment::Chocolate => ["Chocolate", "Mocha"],
            Condiment::WhippedCream => ["Whipped Cream", "Whip"],
        }
    }

    /// Wrap `drink` in this condiment.
    pub fn wrap(self, drink: impl Into<Drink>) -> Drink {
        Drink::Decorated(CondimentDecorator::new(self, drink.into()))
    }
}

impl fmt::Display for Condiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A condiment owning exactly one inner drink.
///
/// The inner drink is moved in at construction, so a decorator can only wrap
/// something that already exists and chains are always finite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondimentDecorator {
    condiment: Condiment,
    wrapped: Box<Drink>,
}

impl CondimentDecorator {
    pub fn new(condiment: Condiment, wrapped: Drink) -> Self {
        Self {
            condiment,
            wrapped: Box::new(wrapped),
        }
    }

    /// Build a decorator from a drink that may be missing.
    ///
    /// Fails with `InvalidArgument` when there is nothing to wrap.
    pub fn try_new(condiment: Condiment, wrapped: Option<Drink>) -> Result<Self> {
        let wrapped = wrapped.ok_or_else(|| {
            CoffeeError::InvalidArgument(format!(
                "{} needs a drink to wrap",
                condiment.label()
            ))
        })?;
        Ok(Self::new(condiment, wrapped))
    }

    pub fn condiment(&self) -> Condiment {
        self.condiment
    }

    pub fn wrapped(&self) -> &Drink {
        &self.wrapped
    }

    /// Take the inner drink out, leaving a plain placeholder behind.
    pub(crate) fn detach_wrapped(&mut self) -> Drink {
        std::mem::replace(&mut *self.wrapped, Drink::Plain(Coffee::HouseBlend))
    }

    /// Give back the inner drink, dropping this layer.
    pub fn into_wrapped(self) -> Drink {
        *self.wrapped
    }
}

impl Beverage for CondimentDecorator {
    fn description(&self) -> String {
        self.wrapped.description() + &self.condiment.suffix()
    }

    fn cost_cents(&self) -> u32 {
        self.condiment.price_cents() + self.wrapped.cost_cents()
    }
}
