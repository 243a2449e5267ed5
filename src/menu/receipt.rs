use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Beverage, Coffee, Condiment, Drink};

/// Serializable summary of a finished drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub description: String,
    pub cost: f64,
    pub coffee: Coffee,
    /// Innermost first.
    pub condiments: Vec<Condiment>,
}

impl Receipt {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild the drink this receipt was issued for.
    pub fn to_drink(&self) -> Drink {
        Drink::assemble(self.coffee, &self.condiments)
    }
}

impl From<&Drink> for Receipt {
    fn from(drink: &Drink) -> Self {
        Self {
            description: drink.description(),
            cost: drink.cost(),
            coffee: drink.coffee(),
            condiments: drink.condiments(),
        }
    }
}
