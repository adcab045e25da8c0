use serde::{Deserialize, Serialize};

use crate::domain::{PublicId, SongAuthor, SongTitle};

/// Petición de alta de una canción: metadatos, portada y audio en un único objeto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSongDto {
  pub title: SongTitle,
  pub author: SongAuthor,
  #[serde(default, with = "crate::dto::bytes")]
  pub cover: Option<Vec<u8>>,
  #[serde(default)]
  pub cover_content_type: Option<String>,
  #[serde(default, with = "crate::dto::bytes")]
  pub file: Option<Vec<u8>>,
  #[serde(default)]
  pub file_content_type: Option<String>,
}

/// Ficha de una canción para listados y búsquedas.
///
/// Se construye vacía y se rellena campo a campo; `favorite` lo decide quien
/// conoce al usuario, no el mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadSongInfoDto {
  pub title: SongTitle,
  pub author: SongAuthor,
  #[serde(default, with = "crate::dto::bytes")]
  pub cover: Option<Vec<u8>>,
  #[serde(default)]
  pub cover_content_type: Option<String>,
  #[serde(default)]
  pub public_id: Option<PublicId>,
  #[serde(default)]
  pub favorite: bool,
}

/// Audio de una canción listo para reproducir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongContentDto {
  pub public_id: Option<PublicId>,
  #[serde(default, with = "crate::dto::bytes")]
  pub file: Option<Vec<u8>>,
  pub file_content_type: Option<String>,
}

impl SongContentDto {
  pub fn new(public_id: Option<PublicId>, file: Option<Vec<u8>>, file_content_type: Option<String>) -> Self {
    Self { public_id, file, file_content_type }
  }
}
