use crate::model::FilterId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VarmanError {
    #[error("Filter not found: {0}")]
    FilterNotFound(FilterId),

    #[error("No variant slot at filter {filter}, variant {variant}")]
    SlotNotFound { filter: usize, variant: usize },

    #[error("Image {0} is not in the catalog")]
    ImageNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, VarmanError>;
