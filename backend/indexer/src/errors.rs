//! Error types shared by the RPC poller, the database layer and the API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-retryable JSON-RPC failure (malformed request, unknown method).
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Event parse error: {0}")]
    EventParse(String),

    /// An indexed amount that does not fit the ledger's `i128` unit.
    #[error("Invalid amount {raw:?} recorded for campaign {campaign_id}")]
    InvalidAmount { campaign_id: String, raw: String },
}

pub type Result<T> = std::result::Result<T, IndexerError>;
