/// Failures of the driver around the accounts. Account rule violations are
/// not errors, they are `Rejection`s returned as values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Engine failed with: {0}")]
    Engine(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
