use std::io::Write;

use crate::error::{CoffeeError, Result};
use crate::menu::cents_to_dollars;
use crate::models::{Coffee, Condiment, Drink};

/// Format a cent amount as `$d.cc`.
pub fn format_price(cents: u32) -> String {
    format!("${:.2}", cents_to_dollars(cents))
}

/// The single stderr line reported for a failed command.
pub fn format_error(error: &CoffeeError) -> String {
    format!("Error: {}", error)
}

/// Print one order line: `<description> $<cost>`.
pub fn display_drink(drink: &Drink) {
    println!("{}", drink);
}

/// Display the menu in a formatted table.
pub fn display_menu() {
    let width = Coffee::ALL
        .iter()
        .map(|c| c.label().len())
        .chain(Condiment::ALL.iter().map(|c| c.label().len() + 2))
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Coffees ===");
    for coffee in Coffee::ALL {
        println!(
            "  {:<width$} {:>6}",
            coffee.label(),
            format_price(coffee.price_cents()),
            width = width
        );
    }

    println!();
    println!("=== Condiments ===");
    for condiment in Condiment::ALL {
        println!(
            "  {:<width$} {:>6}",
            format!("+ {}", condiment.label()),
            format_price(condiment.price_cents()),
            width = width
        );
    }
    println!();
}

/// Write the menu as `kind,name,price` CSV rows.
pub fn write_menu_csv<W: Write>(writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["kind", "name", "price"])?;

    for coffee in Coffee::ALL {
        let price = format!("{:.2}", cents_to_dollars(coffee.price_cents()));
        wtr.write_record(["coffee", coffee.label(), price.as_str()])?;
    }
    for condiment in Condiment::ALL {
        let price = format!("{:.2}", cents_to_dollars(condiment.price_cents()));
        wtr.write_record(["condiment", condiment.label(), price.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(89), "$0.89");
        assert_eq!(format_price(199), "$1.99");
        assert_eq!(format_price(0), "$0.00");
    }

    #[test]
    fn test_format_error_is_one_line() {
        let err = CoffeeError::UnknownItem {
            input: "wiped".to_string(),
            suggestion: Some("Whipped Cream".to_string()),
        };
        let line = format_error(&err);
        assert_eq!(
            line,
            "Error: Unknown menu item: wiped (did you mean 'Whipped Cream'?)"
        );
        assert_eq!(line.lines().count(), 1);
    }

    #[test]
    fn test_menu_csv() {
        let mut out = Vec::new();
        write_menu_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "kind,name,price");
        assert_eq!(lines[1], "coffee,House Blend Coffee,0.89");
        assert_eq!(lines[8], "condiment,Whipped Cream,0.30");
    }
}
