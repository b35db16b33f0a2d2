use crate::modules::events::adapters::outbound::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("event not found: {0}")]
    NotFound(String),
}
