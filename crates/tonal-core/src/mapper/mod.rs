//! Mappers entidad <-> DTO.
//!
//! Todos son structs sin estado (`Copy`, tamaño cero) y todas las operaciones
//! son totales: entrada ausente, salida ausente. Los buffers de bytes pasan
//! siempre por [`copy_bytes`].

pub mod copy;
pub mod song;
pub mod song_content;
pub mod user;

pub use copy::copy_bytes;
pub use song::SongMapper;
pub use song_content::{SongContentMapper, song_content_public_id};
pub use user::UserMapper;
