use crate::models::{Coffee, Condiment, Drink};

/// The three counter orders printed by the `demo` command.
pub fn house_orders() -> Vec<Drink> {
    vec![
        // Expresso with soy milk
        Condiment::SoyMilk.wrap(Coffee::Expresso),
        // Dark roast with chocolate, then whipped cream on top
        Drink::from(Coffee::DarkRoast)
            .with(Condiment::Chocolate)
            .with(Condiment::WhippedCream),
        // House blend with whole milk
        Condiment::WholeMilk.wrap(Coffee::HouseBlend),
    ]
}
