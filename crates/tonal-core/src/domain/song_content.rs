use serde::{Deserialize, Serialize};

use crate::domain::song::Song;

/// El audio de una canción, separado de [`Song`] para que listar el catálogo
/// no arrastre los ficheros completos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongContent {
  /// Fichero de audio en bruto.
  pub file: Option<Vec<u8>>,
  /// MIME type del audio (por ejemplo, `"audio/mpeg"`).
  pub file_content_type: Option<String>,
  /// Canción a la que pertenece este contenido.
  pub song: Option<Song>,
}
