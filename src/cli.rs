use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};

use crate::menu::{DEFAULT_MAX_CONDIMENTS, SURPRISE_CONDIMENT_LIMIT};

/// Coffee decorator: build drinks by stacking condiments on a base coffee.
#[derive(Parser, Debug)]
#[command(name = "coffee_decorator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the house orders.
    Demo,

    /// List coffees and condiments with prices.
    Menu {
        /// Write the menu as CSV instead of a table.
        #[arg(long)]
        csv: bool,
    },

    /// Price an order: a coffee followed by condiments, innermost first.
    Order {
        /// Menu items, e.g. `"dark roast" chocolate "whipped cream"`.
        #[arg(required = true)]
        items: Vec<String>,

        /// Print a JSON receipt instead of the order line.
        #[arg(long)]
        json: bool,
    },

    /// Roll a random drink.
    Surprise {
        /// Seed for a reproducible roll.
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of condiments (at most 100).
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_CONDIMENTS,
            value_parser = RangedU64ValueParser::<usize>::new().range(0..=SURPRISE_CONDIMENT_LIMIT)
        )]
        max_condiments: usize,
    },

    /// Build a drink interactively.
    Build,
}

impl Default for Command {
    fn default() -> Self {
        Command::Demo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_command() {
        let cli = Cli::parse_from(["coffee_decorator", "order", "dark roast", "mocha", "--json"]);
        match cli.command {
            Some(Command::Order { items, json }) => {
                assert_eq!(items, vec!["dark roast", "mocha"]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["coffee_decorator", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["coffee_decorator", "surprise"]);
        assert!(matches!(
            cli.command,
            Some(Command::Surprise {
                seed: None,
                max_condiments: DEFAULT_MAX_CONDIMENTS
            })
        ));
    }

    #[test]
    fn test_surprise_condiment_cap() {
        let cli = Cli::parse_from(["coffee_decorator", "surprise", "--max-condiments", "100"]);
        assert!(matches!(
            cli.command,
            Some(Command::Surprise {
                max_condiments: 100,
                ..
            })
        ));

        assert!(
            Cli::try_parse_from(["coffee_decorator", "surprise", "--max-condiments", "2000000"])
                .is_err()
        );
    }

    #[test]
    fn test_order_requires_items() {
        assert!(Cli::try_parse_from(["coffee_decorator", "order"]).is_err());
    }
}
