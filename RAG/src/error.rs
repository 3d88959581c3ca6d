use thiserror::Error;

/// Terminal failures of a single query. The `Display` text is what the caller sees;
/// the wrapped cause is only ever logged.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Missing query parameter")]
    MissingQuery,
    #[error("Error searching documents")]
    Search(#[source] anyhow::Error),
    #[error("Error generating response")]
    Generation(#[source] anyhow::Error),
}

impl QueryError {
    pub fn status_code(&self) -> u16 {
        match self {
            QueryError::MissingQuery => 400,
            QueryError::Search(_) | QueryError::Generation(_) => 500,
        }
    }
}
