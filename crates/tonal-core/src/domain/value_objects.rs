use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// Título de una canción tal como viaja en los DTOs.
///
/// En el JSON aparece como `{ "value": "..." }`. Envolver y desenvolver el
/// texto es literal: no se recorta ni se normaliza. La validación es un paso
/// aparte ([`SongTitle::validate`]) que decide la capa que acepta la entrada.
/// Un `value` ausente se lee como texto vacío y lo rechaza `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongTitle {
  #[serde(default)]
  value: String,
}

impl SongTitle {
  pub fn new(value: impl Into<String>) -> Self {
    SongTitle { value: value.into() }
  }

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn into_value(self) -> String {
    self.value
  }

  /// No vacío (ni sólo espacios) y como mucho `max_len` caracteres.
  pub fn validate(&self, max_len: usize) -> Result<(), ValidationError> {
    check_text(&self.value, max_len).map_err(|rule| match rule {
      TextRule::Blank => ValidationError::BlankTitle,
      TextRule::TooLong(len) => ValidationError::TitleTooLong { len, max: max_len },
    })
  }
}

impl From<String> for SongTitle {
  fn from(value: String) -> Self {
    SongTitle { value }
  }
}

impl From<&str> for SongTitle {
  fn from(value: &str) -> Self {
    SongTitle::new(value)
  }
}

impl From<SongTitle> for String {
  fn from(title: SongTitle) -> Self {
    title.value
  }
}

impl fmt::Display for SongTitle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

/// Autor (intérprete) de una canción. Mismas reglas que [`SongTitle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongAuthor {
  #[serde(default)]
  value: String,
}

impl SongAuthor {
  pub fn new(value: impl Into<String>) -> Self {
    SongAuthor { value: value.into() }
  }

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn into_value(self) -> String {
    self.value
  }

  pub fn validate(&self, max_len: usize) -> Result<(), ValidationError> {
    check_text(&self.value, max_len).map_err(|rule| match rule {
      TextRule::Blank => ValidationError::BlankAuthor,
      TextRule::TooLong(len) => ValidationError::AuthorTooLong { len, max: max_len },
    })
  }
}

impl From<String> for SongAuthor {
  fn from(value: String) -> Self {
    SongAuthor { value }
  }
}

impl From<&str> for SongAuthor {
  fn from(value: &str) -> Self {
    SongAuthor::new(value)
  }
}

impl From<SongAuthor> for String {
  fn from(author: SongAuthor) -> Self {
    author.value
  }
}

impl fmt::Display for SongAuthor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

enum TextRule {
  Blank,
  TooLong(usize),
}

// Longitud en caracteres (scalar values), no en bytes.
fn check_text(value: &str, max_len: usize) -> Result<(), TextRule> {
  if value.trim().is_empty() {
    return Err(TextRule::Blank);
  }

  let len = value.chars().count();
  if len > max_len {
    return Err(TextRule::TooLong(len));
  }

  Ok(())
}
