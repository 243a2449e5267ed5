use std::fmt;

use serde::{Deserialize, Serialize};

use crate::menu::constants::{DARK_ROAST_CENTS, DECAF_CENTS, EXPRESSO_CENTS, HOUSE_BLEND_CENTS};
use crate::models::Beverage;

/// A base coffee. Leaves of every drink chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coffee {
    HouseBlend,
    DarkRoast,
    Expresso,
    Decaf,
}

impl Coffee {
    /// Every coffee on the menu, in menu order.
    pub const ALL: [Coffee; 4] = [
        Coffee::HouseBlend,
        Coffee::DarkRoast,
        Coffee::Expresso,
        Coffee::Decaf,
    ];

    /// Fixed label shown on orders.
    pub fn label(self) -> &'static str {
        match self {
            Coffee::HouseBlend => "House Blend Coffee",
            Coffee::DarkRoast => "Dark Roast Coffee",
            Coffee::Expresso => "Expresso",
            Coffee::Decaf => "Decaf Coffee",
        }
    }

    /// Base price in cents.
    pub fn price_cents(self) -> u32 {
        match self {
            Coffee::HouseBlend => HOUSE_BLEND_CENTS,
            Coffee::DarkRoast => DARK_ROAST_CENTS,
            Coffee::Expresso => EXPRESSO_CENTS,
            Coffee::Decaf => DECAF_CENTS,
        }
    }

    /// Names a customer may use for this coffee.
    pub fn aliases(self) -> [&'static str; 2] {
        match self {
            Coffee::HouseBlend => ["House Blend", "House Blend Coffee"],
            Coffee::DarkRoast => ["Dark Roast", "Dark Roast Coffee"],
            Coffee::Expresso => ["Expresso", "Espresso"],
            Coffee::Decaf => ["Decaf", "Decaf Coffee"],
        }
    }
}

impl Beverage for Coffee {
    fn description(&self) -> String {
        self.label().to_string()
    }

    fn cost_cents(&self) -> u32 {
        self.price_cents()
    }
}

impl fmt::Display for Coffee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
