// crates/tonal-core/src/errors.rs
use thiserror::Error;

use crate::ports::RepoError;

/// Error genérico del núcleo de Tonal.
///
/// Las capas superiores (HTTP, CLI, etc.) deberían mapear este error
/// a respuestas o logs. Los mappers nunca lo producen.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(#[from] RepoError),

  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("not found")]
  NotFound,
}

/// Entrada rechazada antes de llegar al mapper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("title must not be blank")]
  BlankTitle,

  #[error("title is {len} characters long, max is {max}")]
  TitleTooLong { len: usize, max: usize },

  #[error("author must not be blank")]
  BlankAuthor,

  #[error("author is {len} characters long, max is {max}")]
  AuthorTooLong { len: usize, max: usize },

  #[error("missing required field: {0}")]
  MissingField(&'static str),
}
