use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(String),
}
