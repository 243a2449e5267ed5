use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoffeeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown menu item: {input}{}", did_you_mean(.suggestion))]
    UnknownItem {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Order is empty")]
    EmptyOrder,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CoffeeError>;
