use crate::menu::constants::cents_to_dollars;

/// Anything that can be served: a plain coffee or a coffee wrapped in condiments.
///
/// Both operations are pure. Decorators answer them by asking the drink they
/// wrap and adding their own part, so every chain bottoms out at a coffee.
pub trait Beverage {
    /// Human-readable label, innermost item first.
    fn description(&self) -> String;

    /// Price in cents.
    fn cost_cents(&self) -> u32;

    /// Price in dollars.
    fn cost(&self) -> f64 {
        cents_to_dollars(self.cost_cents())
    }
}
