use serde::{Deserialize, Serialize};

/// Vista pública del usuario autenticado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadUserDto {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub image_url: Option<String>,
}

impl ReadUserDto {
  pub fn new(first_name: String, last_name: String, email: String, image_url: Option<String>) -> Self {
    Self { first_name, last_name, email, image_url }
  }
}
