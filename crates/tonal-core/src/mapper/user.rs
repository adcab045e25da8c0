use crate::domain::User;
use crate::dto::ReadUserDto;

#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl UserMapper {
  pub fn user_to_read_dto(&self, user: Option<&User>) -> Option<ReadUserDto> {
    let user = user?;
    tracing::trace!("User -> ReadUserDto");

    Some(ReadUserDto::new(
      user.first_name.clone(),
      user.last_name.clone(),
      user.email.clone(),
      user.image_url.clone(),
    ))
  }
}
