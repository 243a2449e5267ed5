use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::models::{Beverage, Coffee, Condiment, Drink};

/// Roll a coffee and between zero and `max_condiments` condiments.
///
/// Condiments are drawn with replacement, so the same one may stack.
pub fn random_drink(rng: &mut impl Rng, max_condiments: usize) -> Drink {
    let coffee = Coffee::ALL[rng.gen_range(0..Coffee::ALL.len())];
    let layers = rng.gen_range(0..=max_condiments);

    (0..layers).fold(Drink::from(coffee), |drink, _| {
        drink.with(Condiment::ALL[rng.gen_range(0..Condiment::ALL.len())])
    })
}

/// Roll a drink, reproducibly when a seed is given.
pub fn surprise(seed: Option<u64>, max_condiments: usize) -> Drink {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let drink = random_drink(&mut rng, max_condiments);
    info!(?seed, description = %drink.description(), "surprise drink rolled");
    drink
}
