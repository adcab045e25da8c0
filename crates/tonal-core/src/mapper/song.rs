use crate::domain::{Song, SongAuthor, SongTitle};
use crate::dto::{ReadSongInfoDto, SaveSongDto};
use crate::mapper::copy::copy_bytes;

/// Conversión entre [`Song`] y sus DTOs de lectura/escritura.
#[derive(Debug, Clone, Copy, Default)]
pub struct SongMapper;

impl SongMapper {
  /// Alta: toma metadatos y portada. El audio va por
  /// [`SongContentMapper`](crate::mapper::SongContentMapper) y el
  /// `public_id` lo asigna el repositorio.
  pub fn save_dto_to_song(&self, dto: Option<&SaveSongDto>) -> Option<Song> {
    let dto = dto?;
    tracing::trace!("SaveSongDto -> Song");

    Some(Song {
      title: title_to_text(&dto.title),
      author: author_to_text(&dto.author),
      cover: copy_bytes(dto.cover.as_deref()),
      cover_content_type: dto.cover_content_type.clone(),
      ..Song::default()
    })
  }

  /// Lectura: `favorite` queda en `false`.
  pub fn song_to_read_info_dto(&self, song: Option<&Song>) -> Option<ReadSongInfoDto> {
    let song = song?;
    tracing::trace!(public_id = ?song.public_id, "Song -> ReadSongInfoDto");

    Some(ReadSongInfoDto {
      title: text_to_title(&song.title),
      author: text_to_author(&song.author),
      cover: copy_bytes(song.cover.as_deref()),
      cover_content_type: song.cover_content_type.clone(),
      public_id: song.public_id,
      ..ReadSongInfoDto::default()
    })
  }
}

fn title_to_text(title: &SongTitle) -> String {
  String::from(title.clone())
}

fn author_to_text(author: &SongAuthor) -> String {
  String::from(author.clone())
}

fn text_to_title(text: &str) -> SongTitle {
  SongTitle::from(text)
}

fn text_to_author(text: &str) -> SongAuthor {
  SongAuthor::from(text)
}
