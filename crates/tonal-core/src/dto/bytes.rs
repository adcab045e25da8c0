//! Codificación base64 de los buffers opcionales de los DTOs.
//!
//! Uso: `#[serde(default, with = "crate::dto::bytes")]` sobre un
//! `Option<Vec<u8>>`. `None` se escribe como `null`; al leer se aceptan
//! `null` o la clave ausente.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  match bytes {
    Some(b) => serializer.serialize_some(&STANDARD.encode(b)),
    None => serializer.serialize_none(),
  }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
  D: Deserializer<'de>,
{
  let encoded: Option<String> = Option::deserialize(deserializer)?;
  encoded.map(|text| STANDARD.decode(text.as_bytes()).map_err(serde::de::Error::custom)).transpose()
}
