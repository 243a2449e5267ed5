use std::fmt;

use crate::models::{Beverage, Coffee, Condiment, CondimentDecorator};

/// An owned drink: a plain coffee or a condiment layered over another drink.
///
/// Every walk over the chain is a loop, including drop, clone and equality,
/// so chain length is bounded by memory rather than stack.
pub enum Drink {
    Plain(Coffee),
    Decorated(CondimentDecorator),
}

impl Drink {
    /// Add one more condiment on the outside.
    pub fn with(self, condiment: Condiment) -> Drink {
        condiment.wrap(self)
    }

    /// The coffee at the bottom of the chain.
    pub fn coffee(&self) -> Coffee {
        let mut current = self;
        loop {
            match current {
                Drink::Plain(coffee) => return *coffee,
                Drink::Decorated(decorator) => current = decorator.wrapped(),
            }
        }
    }

    /// Condiments in the order they were added (innermost first).
    pub fn condiments(&self) -> Vec<Condiment> {
        let mut layers = Vec::new();
        let mut current = self;
        while let Drink::Decorated(decorator) = current {
            layers.push(decorator.condiment());
            current = decorator.wrapped();
        }
        layers.reverse();
        layers
    }

    /// Number of condiment layers.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Drink::Decorated(decorator) = current {
            depth += 1;
            current = decorator.wrapped();
        }
        depth
    }

    /// Rebuild a drink from its coffee and condiments (innermost first).
    pub fn assemble(coffee: Coffee, condiments: &[Condiment]) -> Drink {
        condiments
            .iter()
            .fold(Drink::from(coffee), |drink, &condiment| drink.with(condiment))
    }

    fn detach_inner(&mut self) -> Option<Drink> {
        match self {
            Drink::Plain(_) => None,
            Drink::Decorated(decorator) => Some(decorator.detach_wrapped()),
        }
    }
}

impl Beverage for Drink {
    fn description(&self) -> String {
        let mut description = self.coffee().description();
        for condiment in self.condiments() {
            description.push_str(&condiment.suffix());
        }
        description
    }

    fn cost_cents(&self) -> u32 {
        let mut cents = 0;
        let mut current = self;
        loop {
            match current {
                Drink::Plain(coffee) => return cents + coffee.cost_cents(),
                Drink::Decorated(decorator) => {
                    cents += decorator.condiment().price_cents();
                    current = decorator.wrapped();
                }
            }
        }
    }
}

impl Drop for Drink {
    fn drop(&mut self) {
        let mut next = self.detach_inner();
        while let Some(mut drink) = next {
            next = drink.detach_inner();
        }
    }
}

impl Clone for Drink {
    fn clone(&self) -> Self {
        Drink::assemble(self.coffee(), &self.condiments())
    }
}

impl PartialEq for Drink {
    fn eq(&self, other: &Self) -> bool {
        self.depth() == other.depth()
            && self.coffee() == other.coffee()
            && self.condiments() == other.condiments()
    }
}

impl Eq for Drink {}

impl fmt::Debug for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drink")
            .field("coffee", &self.coffee())
            .field("condiments", &self.condiments())
            .finish()
    }
}

impl From<Coffee> for Drink {
    fn from(coffee: Coffee) -> Self {
        Drink::Plain(coffee)
    }
}

impl From<CondimentDecorator> for Drink {
    fn from(decorator: CondimentDecorator) -> Self {
        Drink::Decorated(decorator)
    }
}

/// Renders the order line, e.g. `Expresso, Soy Milk $2.14`.
impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${:.2}", self.description(), self.cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_introspection() {
        let drink = Drink::from(Coffee::DarkRoast)
            .with(Condiment::Chocolate)
            .with(Condiment::WhippedCream);

        assert_eq!(drink.coffee(), Coffee::DarkRoast);
        assert_eq!(
            drink.condiments(),
            vec![Condiment::Chocolate, Condiment::WhippedCream]
        );
        assert_eq!(drink.depth(), 2);
    }

    #[test]
    fn test_plain_drink_has_no_layers() {
        let drink = Drink::from(Coffee::Decaf);
        assert_eq!(drink.depth(), 0);
        assert!(drink.condiments().is_empty());
        assert_eq!(drink.to_string(), "Decaf Coffee $1.05");
    }

    #[test]
    fn test_display_line() {
        let drink = Condiment::SoyMilk.wrap(Coffee::Expresso);
        assert_eq!(drink.to_string(), "Expresso, Soy Milk $2.14");
    }

    #[test]
    fn test_same_condiment_can_stack() {
        let drink = Drink::from(Coffee::HouseBlend)
            .with(Condiment::Chocolate)
            .with(Condiment::Chocolate);
        assert_eq!(drink.description(), "House Blend Coffee, Chocolate, Chocolate");
        assert_eq!(drink.cost_cents(), 89 + 20 + 20);
    }

    #[test]
    fn test_deep_chain_terminates() {
        let mut drink = Drink::from(Coffee::Decaf);
        for _ in 0..500 {
            drink = drink.with(Condiment::WholeMilk);
        }
        assert_eq!(drink.depth(), 500);
        assert_eq!(drink.cost_cents(), 105 + 500 * 10);
    }

    #[test]
    fn test_clone_and_debug_keep_layers() {
        let drink = Drink::from(Coffee::Expresso)
            .with(Condiment::SoyMilk)
            .with(Condiment::Chocolate);
        let copy = drink.clone();
        assert_eq!(copy, drink);
        assert_ne!(copy, Drink::from(Coffee::Expresso).with(Condiment::SoyMilk));
        assert_eq!(
            format!("{:?}", drink),
            "Drink { coffee: Expresso, condiments: [SoyMilk, Chocolate] }"
        );
    }
}
