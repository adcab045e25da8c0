use std::collections::HashSet;

use crate::config::CatalogConfig;
use crate::domain::{PublicId, Song};
use crate::dto::{ReadSongInfoDto, SaveSongDto, SongContentDto};
use crate::errors::{CoreError, ValidationError};
use crate::mapper::{SongContentMapper, SongMapper};
use crate::ports::SongRepository;

/// Orquesta alta, lectura y favoritos del catálogo sobre un [`SongRepository`].
///
/// Valida la entrada, delega en los mappers y persiste a través del port.
/// `favorite` se rellena aquí, después de mapear, porque depende del usuario.
pub struct CatalogService<R>
where
  R: SongRepository,
{
  repo: R,
  config: CatalogConfig,
  songs: SongMapper,
  contents: SongContentMapper,
}

impl<R> CatalogService<R>
where
  R: SongRepository,
{
  pub fn new(repo: R, config: CatalogConfig) -> Self {
    Self { repo, config, songs: SongMapper, contents: SongContentMapper }
  }

  /// Alta de una canción:
  /// - valida título, autor y presencia de portada/audio
  /// - guarda la `Song` (el repositorio asigna `public_id`)
  /// - guarda el `SongContent` enlazado a esa canción
  ///
  /// Si falla el contenido se borra la canción: o quedan las dos, o ninguna.
  pub fn add_song(&self, dto: SaveSongDto) -> Result<ReadSongInfoDto, CoreError> {
    if let Err(e) = self.validate(&dto) {
      tracing::warn!(error = %e, "rejected song");
      return Err(e.into());
    }

    // Con entrada presente los mappers siempre devuelven `Some`.
    let song = self.songs.save_dto_to_song(Some(&dto)).unwrap_or_default();
    let saved = self.repo.save_song(song)?;
    tracing::debug!(public_id = ?saved.public_id, "song saved");

    let mut content = self.contents.save_dto_to_song_content(Some(&dto)).unwrap_or_default();
    content.song = Some(saved.clone());

    if let Err(e) = self.repo.save_song_content(content) {
      tracing::warn!(error = %e, public_id = ?saved.public_id, "content not saved, rolling back song");
      if let Some(id) = saved.public_id {
        if let Err(undo) = self.repo.delete_song(id) {
          tracing::warn!(error = %undo, %id, "rollback failed");
        }
      }
      return Err(e.into());
    }

    Ok(self.songs.song_to_read_info_dto(Some(&saved)).unwrap_or_default())
  }

  /// Todo el catálogo; con `user_email` se marcan sus favoritos.
  pub fn list_songs(&self, user_email: Option<&str>) -> Result<Vec<ReadSongInfoDto>, CoreError> {
    let songs = self.repo.list_songs()?;
    tracing::debug!(count = songs.len(), "listing songs");

    self.to_read_dtos(&songs, user_email)
  }

  /// Canciones cuyo título o autor contiene `term`, sin distinguir mayúsculas.
  pub fn search(&self, term: &str, user_email: Option<&str>) -> Result<Vec<ReadSongInfoDto>, CoreError> {
    let needle = term.trim().to_lowercase();
    let songs: Vec<Song> = self
      .repo
      .list_songs()?
      .into_iter()
      .filter(|song| song.title.to_lowercase().contains(&needle) || song.author.to_lowercase().contains(&needle))
      .collect();
    tracing::debug!(term, hits = songs.len(), "search");

    self.to_read_dtos(&songs, user_email)
  }

  /// Marca o desmarca una canción como favorita y la devuelve con el estado nuevo.
  pub fn like(&self, user_email: &str, id: PublicId, favorite: bool) -> Result<ReadSongInfoDto, CoreError> {
    let song = self.repo.find_song(id)?.ok_or(CoreError::NotFound)?;
    self.repo.set_favorite(user_email, id, favorite)?;
    tracing::debug!(%id, favorite, "favorite updated");

    let mut dto = self.songs.song_to_read_info_dto(Some(&song)).unwrap_or_default();
    dto.favorite = favorite;
    Ok(dto)
  }

  pub fn list_favorites(&self, user_email: &str) -> Result<Vec<ReadSongInfoDto>, CoreError> {
    let mut favorites = Vec::new();
    for id in self.repo.favorite_ids(user_email)? {
      // Un favorito cuya canción ya no existe se ignora.
      if let Some(song) = self.repo.find_song(id)? {
        let mut dto = self.songs.song_to_read_info_dto(Some(&song)).unwrap_or_default();
        dto.favorite = true;
        favorites.push(dto);
      }
    }

    Ok(favorites)
  }

  pub fn get_song_content(&self, id: PublicId) -> Result<SongContentDto, CoreError> {
    let content = self.repo.find_song_content(id)?;
    self.contents.song_content_to_dto(content.as_ref()).ok_or(CoreError::NotFound)
  }

  fn to_read_dtos(&self, songs: &[Song], user_email: Option<&str>) -> Result<Vec<ReadSongInfoDto>, CoreError> {
    let liked: HashSet<PublicId> = match user_email {
      Some(email) => self.repo.favorite_ids(email)?.into_iter().collect(),
      None => HashSet::new(),
    };

    Ok(
      songs
        .iter()
        .filter_map(|song| self.songs.song_to_read_info_dto(Some(song)))
        .map(|mut dto| {
          dto.favorite = dto.public_id.is_some_and(|id| liked.contains(&id));
          dto
        })
        .collect(),
    )
  }

  fn validate(&self, dto: &SaveSongDto) -> Result<(), ValidationError> {
    dto.title.validate(self.config.max_title_len)?;
    dto.author.validate(self.config.max_author_len)?;

    require(&dto.cover, "cover")?;
    require(&dto.cover_content_type, "coverContentType")?;
    require(&dto.file, "file")?;
    require(&dto.file_content_type, "fileContentType")?;

    Ok(())
  }
}

fn require<T>(field: &Option<T>, name: &'static str) -> Result<(), ValidationError> {
  match field {
    Some(_) => Ok(()),
    None => Err(ValidationError::MissingField(name)),
  }
}
