use tonal_core::domain::{SongAuthor, SongContent, SongTitle, User};
use tonal_core::dto::SaveSongDto;
use tonal_core::mapper::{SongContentMapper, SongMapper, UserMapper};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), serde_json::Error> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let save = SaveSongDto {
    title: SongTitle::new("Imagine"),
    author: SongAuthor::new("Lennon"),
    cover: Some(vec![0x01, 0x02]),
    cover_content_type: Some("image/png".to_string()),
    file: None,
    file_content_type: Some("audio/mpeg".to_string()),
  };

  let song = SongMapper.save_dto_to_song(Some(&save));
  tracing::info!(?song, "mapped SaveSongDto -> Song");

  let read = SongMapper.song_to_read_info_dto(song.as_ref());
  println!("{}", serde_json::to_string_pretty(&read)?);

  let content = SongContent { file: None, file_content_type: Some("audio/mpeg".to_string()), song: None };
  let content_dto = SongContentMapper.song_content_to_dto(Some(&content));
  println!("{}", serde_json::to_string_pretty(&content_dto)?);

  let user = User {
    first_name: "Ada".to_string(),
    last_name: "Lovelace".to_string(),
    email: "ada@x.io".to_string(),
    image_url: None,
  };
  println!("{}", serde_json::to_string_pretty(&UserMapper.user_to_read_dto(Some(&user)))?);

  Ok(())
}
