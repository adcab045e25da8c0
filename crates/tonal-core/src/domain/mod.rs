pub mod ids;
pub mod song;
pub mod song_content;
pub mod user;
pub mod value_objects;

pub use ids::PublicId;
pub use song::Song;
pub use song_content::SongContent;
pub use user::User;
pub use value_objects::{SongAuthor, SongTitle};
