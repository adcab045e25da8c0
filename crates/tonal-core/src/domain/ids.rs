use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Identificador público de una canción.
///
/// Es el único identificador que cruza la frontera HTTP; la clave interna de
/// persistencia nunca sale del repositorio. Lo asigna el repositorio al
/// guardar (ver [`crate::ports::SongRepository::save_song`]), nunca el mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicId(Uuid);

impl PublicId {
  /// Genera un nuevo identificador único (UUID v4).
  pub fn new() -> Self {
    PublicId(Uuid::new_v4())
  }

  /// Construye un `PublicId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    PublicId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for PublicId {
  fn from(u: Uuid) -> Self {
    PublicId(u)
  }
}

impl From<PublicId> for Uuid {
  fn from(id: PublicId) -> Self {
    id.0
  }
}

impl FromStr for PublicId {
  type Err = uuid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s).map(PublicId)
  }
}

impl fmt::Display for PublicId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_and_display_agree() {
    let id = PublicId::new();
    let parsed: PublicId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<PublicId>().is_err());
  }

  #[test]
  fn test_serializes_as_plain_uuid_string() {
    let u = Uuid::parse_str("6f1c2a4e-8d0b-4c55-9a7e-2f3b1d9e0c11").unwrap();
    let json = serde_json::to_string(&PublicId::from_uuid(u)).unwrap();
    assert_eq!(json, "\"6f1c2a4e-8d0b-4c55-9a7e-2f3b1d9e0c11\"");
  }
}
