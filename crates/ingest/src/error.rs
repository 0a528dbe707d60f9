use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row {row}: field '{field}' has unparsable value '{value}'")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Expected a JSON array of row objects")]
    NotAnArray,
}
