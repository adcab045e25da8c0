use crate::domain::{PublicId, SongContent};
use crate::dto::{SaveSongDto, SongContentDto};
use crate::mapper::copy::copy_bytes;

/// Conversión entre [`SongContent`] y sus DTOs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SongContentMapper;

impl SongContentMapper {
  pub fn song_content_to_dto(&self, content: Option<&SongContent>) -> Option<SongContentDto> {
    let content = content?;
    let public_id = song_content_public_id(Some(content));
    tracing::trace!(?public_id, "SongContent -> SongContentDto");

    Some(SongContentDto::new(
      public_id,
      copy_bytes(content.file.as_deref()),
      content.file_content_type.clone(),
    ))
  }

  /// Sólo el audio; `song` se enlaza después de guardar la canción.
  pub fn save_dto_to_song_content(&self, dto: Option<&SaveSongDto>) -> Option<SongContent> {
    let dto = dto?;
    tracing::trace!("SaveSongDto -> SongContent");

    Some(SongContent {
      file: copy_bytes(dto.file.as_deref()),
      file_content_type: dto.file_content_type.clone(),
      ..SongContent::default()
    })
  }
}

/// `content.song.public_id`, cortando en el primer eslabón ausente.
pub fn song_content_public_id(content: Option<&SongContent>) -> Option<PublicId> {
  content?.song.as_ref()?.public_id
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Song, SongAuthor, SongTitle};

  fn song_with(public_id: Option<PublicId>) -> Song {
    Song { public_id, title: "Imagine".into(), author: "Lennon".into(), ..Song::default() }
  }

  #[test]
  fn test_public_id_navigation_short_circuits() {
    assert_eq!(song_content_public_id(None), None);

    let orphan = SongContent::default();
    assert_eq!(song_content_public_id(Some(&orphan)), None);

    let unsaved = SongContent { song: Some(song_with(None)), ..SongContent::default() };
    assert_eq!(song_content_public_id(Some(&unsaved)), None);

    let id = PublicId::new();
    let linked = SongContent { song: Some(song_with(Some(id))), ..SongContent::default() };
    assert_eq!(song_content_public_id(Some(&linked)), Some(id));
  }

  #[test]
  fn test_absent_input_maps_to_absent_output() {
    assert_eq!(SongContentMapper.song_content_to_dto(None), None);
    assert_eq!(SongContentMapper.save_dto_to_song_content(None), None);
  }

  #[test]
  fn test_content_without_file_or_song() {
    let content =
      SongContent { file: None, file_content_type: Some("audio/mpeg".into()), song: None };

    let dto = SongContentMapper.song_content_to_dto(Some(&content)).unwrap();
    assert_eq!(dto, SongContentDto::new(None, None, Some("audio/mpeg".into())));
  }

  #[test]
  fn test_content_to_dto_copies_file_and_derives_public_id() {
    let id = PublicId::new();
    let content = SongContent {
      file: Some(vec![1, 2, 3, 4]),
      file_content_type: Some("audio/ogg".into()),
      song: Some(song_with(Some(id))),
    };

    let mut dto = SongContentMapper.song_content_to_dto(Some(&content)).unwrap();
    assert_eq!(dto.public_id, Some(id));
    assert_eq!(dto.file, content.file);
    assert_ne!(dto.file.as_ref().unwrap().as_ptr(), content.file.as_ref().unwrap().as_ptr());

    dto.file.as_mut().unwrap().clear();
    assert_eq!(content.file.as_deref(), Some(&[1, 2, 3, 4][..]));
  }

  #[test]
  fn test_save_dto_to_song_content_leaves_song_unset() {
    let dto = SaveSongDto {
      title: SongTitle::new("Imagine"),
      author: SongAuthor::new("Lennon"),
      cover: Some(vec![0x01]),
      cover_content_type: Some("image/png".into()),
      file: Some(vec![0x49, 0x44, 0x33]),
      file_content_type: Some("audio/mpeg".into()),
    };

    let content = SongContentMapper.save_dto_to_song_content(Some(&dto)).unwrap();
    assert_eq!(content.file, dto.file);
    assert_ne!(content.file.as_ref().unwrap().as_ptr(), dto.file.as_ref().unwrap().as_ptr());
    assert_eq!(content.file_content_type.as_deref(), Some("audio/mpeg"));
    assert_eq!(content.song, None);
  }
}
