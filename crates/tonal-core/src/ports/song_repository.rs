use crate::domain::{PublicId, Song, SongContent};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("entity not found")]
  NotFound,
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port de persistencia del catálogo.
///
/// La implementación es también el colaborador de identidad: es quien asigna
/// `public_id` a las canciones nuevas.
pub trait SongRepository {
  // --- Escritura ---
  /// Guarda la canción y la devuelve con su `public_id` asignado.
  fn save_song(&self, song: Song) -> Result<Song, RepoError>;
  fn save_song_content(&self, content: SongContent) -> Result<(), RepoError>;
  /// Borra la canción y su contenido, si lo tiene.
  fn delete_song(&self, id: PublicId) -> Result<(), RepoError>;

  // --- Lectura ---
  fn list_songs(&self) -> Result<Vec<Song>, RepoError>;
  fn find_song(&self, id: PublicId) -> Result<Option<Song>, RepoError>;
  fn find_song_content(&self, id: PublicId) -> Result<Option<SongContent>, RepoError>;

  // --- Favoritos, por email de usuario ---
  fn set_favorite(&self, user_email: &str, id: PublicId, favorite: bool) -> Result<(), RepoError>;
  fn favorite_ids(&self, user_email: &str) -> Result<Vec<PublicId>, RepoError>;
}
