use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatesError {
    #[error("rate request failed: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("rate endpoint answered HTTP {0}")]
    Status(u16),
    #[error("rate for {0} missing from response")]
    Missing(&'static str),
    #[error("rate for {0} is not a positive number")]
    Invalid(&'static str),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage: {0}")]
    Storage(String),
    #[error("stored history is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
