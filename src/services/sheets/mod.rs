pub mod google;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    #[error("failed to sign service account assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} rejected the request ({status}): {body}")]
    Rejected {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("spreadsheet has no sheets")]
    NoSheets,

    #[error("invalid spreadsheet API url: {0}")]
    Url(String),
}

/// Append-only sink for reservation rows.
#[async_trait]
pub trait SpreadsheetStore: Send + Sync {
    async fn append_row(&self, row: &[String]) -> Result<(), SheetsError>;
}
