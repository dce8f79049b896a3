#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config ({context}): {detail}")]
    Config { context: &'static str, detail: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("format: {0}")]
    Format(#[from] concord_api::FormatError),

    #[error("decode: {0}")]
    Decode(#[from] concord_api::DecodeError),

    #[error("output: {0}")]
    Output(#[from] serde_json::Error),
}
