//! Objetos de transferencia: lo que entra y sale por la frontera HTTP/JSON.

pub mod bytes;
pub mod song;
pub mod user;

pub use song::{ReadSongInfoDto, SaveSongDto, SongContentDto};
pub use user::ReadUserDto;
