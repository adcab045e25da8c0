use serde::{Deserialize, Serialize};

use crate::domain::ids::PublicId;

/// La canción tal como la guarda el catálogo.
///
/// `Default` representa una entidad recién creada: texto vacío, sin portada y
/// sin `public_id` hasta que el repositorio la persiste.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador público; `None` mientras la canción no se haya guardado.
  pub public_id: Option<PublicId>,
  /// El título de la canción.
  pub title: String,
  /// El intérprete principal.
  pub author: String,
  /// Imagen de portada en bruto.
  pub cover: Option<Vec<u8>>,
  /// MIME type de la portada (por ejemplo, `"image/png"`).
  pub cover_content_type: Option<String>,
}
