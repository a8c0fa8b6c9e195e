use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures while retrieving or decoding the daily scoreboard.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("scoreboard request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("scoreboard request returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode scoreboard: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unknown timezone '{0}'")]
    Timezone(String),

    #[error("invalid scoreboard url: {0}")]
    Url(String),
}

/// Failures reading from or writing to the observation store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("corrupt stored observation: {0}")]
    Parse(String),

    #[error("no stored observation with key {0}")]
    MissingSlot(i64),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Failures delivering a notification to the chat channel.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("notification request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notification rejected with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed notification destination: {0}")]
    Destination(String),

    #[error("failed to encode notification: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
