use std::io;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use coffee_decorator_rs::cli::{Cli, Command};
use coffee_decorator_rs::error::Result;
use coffee_decorator_rs::interface::{
    build_drink_interactively, display_drink, display_menu, format_error, write_menu_csv,
};
use coffee_decorator_rs::menu::{house_orders, parse_order, surprise, Receipt};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command.unwrap_or_default()) {
        eprintln!("{}", format_error(&e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Demo => {
            for drink in house_orders() {
                display_drink(&drink);
            }
        }
        Command::Menu { csv } => {
            if csv {
                write_menu_csv(io::stdout().lock())?;
            } else {
                display_menu();
            }
        }
        Command::Order { items, json } => {
            let drink = parse_order(&items)?;
            if json {
                println!("{}", Receipt::from(&drink).to_json()?);
            } else {
                display_drink(&drink);
            }
        }
        Command::Surprise {
            seed,
            max_condiments,
        } => display_drink(&surprise(seed, max_condiments)),
        Command::Build => {
            let drink = build_drink_interactively()?;
            println!();
            display_drink(&drink);
        }
    }

    Ok(())
}
