use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{CoffeeError, Result};
use crate::menu::constants::{
    FUZZY_ACCEPT_THRESHOLD, FUZZY_MAX_LENGTH_GAP, FUZZY_SUGGEST_THRESHOLD,
};
use crate::menu::order::OrderItem;
use crate::models::{Coffee, Condiment};

/// Canonical form for name comparison: lowercase ASCII letters and digits only.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn menu_aliases() -> Vec<(OrderItem, &'static str)> {
    let coffees = Coffee::ALL
        .into_iter()
        .flat_map(|c| c.aliases().map(|a| (OrderItem::Coffee(c), a)));
    let condiments = Condiment::ALL
        .into_iter()
        .flat_map(|c| c.aliases().map(|a| (OrderItem::Condiment(c), a)));
    coffees.chain(condiments).collect()
}

/// Resolve a customer-typed name to a menu item.
///
/// Exact matches ignore case, spacing and punctuation. A fuzzy Jaro-Winkler
/// match is only taken for a single word close in length to the alias, so a
/// typo is forgiven but extra words are never dropped. Anything else comes
/// back as `UnknownItem` carrying the closest name as a suggestion.
pub fn lookup_item(input: &str) -> Result<OrderItem> {
    let wanted = normalize(input);
    if wanted.is_empty() {
        return Err(CoffeeError::UnknownItem {
            input: input.to_string(),
            suggestion: None,
        });
    }

    let aliases = menu_aliases();

    if let Some((item, _)) = aliases.iter().find(|(_, alias)| normalize(alias) == wanted) {
        return Ok(*item);
    }

    let best = aliases
        .iter()
        .map(|(item, alias)| {
            let alias = normalize(alias);
            (*item, alias.len(), jaro_winkler(&alias, &wanted))
        })
        .max_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    let single_word = input.split_whitespace().count() == 1;

    match best {
        Some((item, alias_len, score))
            if score >= FUZZY_ACCEPT_THRESHOLD
                && single_word
                && alias_len.abs_diff(wanted.len()) <= FUZZY_MAX_LENGTH_GAP =>
        {
            debug!(input, matched = item.label(), score, "fuzzy menu match");
            Ok(item)
        }
        Some((item, _, score)) if score >= FUZZY_SUGGEST_THRESHOLD => Err(CoffeeError::UnknownItem {
            input: input.to_string(),
            suggestion: Some(item.label().to_string()),
        }),
        _ => Err(CoffeeError::UnknownItem {
            input: input.to_string(),
            suggestion: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Dark Roast"), "darkroast");
        assert_eq!(normalize("  whipped-cream "), "whippedcream");
        assert_eq!(normalize("SoyMilk"), "soymilk");
    }

    #[test]
    fn test_exact_lookup_ignores_case_and_spacing() {
        assert_eq!(
            lookup_item("dark roast").unwrap(),
            OrderItem::Coffee(Coffee::DarkRoast)
        );
        assert_eq!(
            lookup_item("WHIPPED_CREAM").unwrap(),
            OrderItem::Condiment(Condiment::WhippedCream)
        );
        assert_eq!(
            lookup_item("House Blend Coffee").unwrap(),
            OrderItem::Coffee(Coffee::HouseBlend)
        );
    }

    #[test]
    fn test_fuzzy_lookup_accepts_typo() {
        assert_eq!(
            lookup_item("chocolat").unwrap(),
            OrderItem::Condiment(Condiment::Chocolate)
        );
    }

    #[test]
    fn test_extra_words_are_not_dropped() {
        for (input, closest) in [
            ("decaf soy", "Decaf Coffee"),
            ("chocolate milk", "Chocolate"),
            ("soy latte", "Soy Milk"),
            ("dark chocolate", "Dark Roast Coffee"),
        ] {
            match lookup_item(input) {
                Err(CoffeeError::UnknownItem { input: got, suggestion }) => {
                    assert_eq!(got, input);
                    assert_eq!(suggestion.as_deref(), Some(closest), "input {:?}", input);
                }
                other => panic!("{:?} should not resolve, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_near_miss_gets_suggestion() {
        let err = lookup_item("wiped").unwrap_err();
        match &err {
            CoffeeError::UnknownItem { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("Whipped Cream"));
            }
            other => panic!("expected UnknownItem, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Unknown menu item: wiped (did you mean 'Whipped Cream'?)"
        );
    }

    #[test]
    fn test_short_prefix_is_suggested_not_accepted() {
        let err = lookup_item("expr").unwrap_err();
        assert!(matches!(
            &err,
            CoffeeError::UnknownItem { suggestion: Some(name), .. } if name == "Expresso"
        ));
        assert_eq!(
            err.to_string(),
            "Unknown menu item: expr (did you mean 'Expresso'?)"
        );
    }

    #[test]
    fn test_unknown_item() {
        let err = lookup_item("zzzz").unwrap_err();
        assert!(matches!(
            err,
            CoffeeError::UnknownItem {
                suggestion: None,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Unknown menu item: zzzz");

        let err = lookup_item("").unwrap_err();
        assert!(matches!(
            err,
            CoffeeError::UnknownItem {
                suggestion: None,
                ..
            }
        ));
    }
}
