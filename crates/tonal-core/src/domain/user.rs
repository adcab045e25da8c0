use serde::{Deserialize, Serialize};

/// Usuario autenticado, tal como lo conoce el contexto de usuarios.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  /// Avatar del proveedor de identidad, si lo hay.
  pub image_url: Option<String>,
}
