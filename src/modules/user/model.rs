use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::modules::user::schema::UserEntity;

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchUsersQuery {
    pub name: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Page index must not be less than zero"))]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "Page size must not be less than one"))]
    pub size: i64,
}

#[derive(Debug, Clone)]
pub struct InsertUser {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        UserResponse { id: entity.id, name: entity.name }
    }
}
