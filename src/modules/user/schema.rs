use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

pub const USERS_TABLE: &str = "users";

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: i64,
    pub name: String,
}

/// Row shape of a projected search. A slot whose key did not resolve decodes as absent.
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl UserRow {
    pub fn into_entity(self) -> Option<UserEntity> {
        match (self.id, self.name) {
            (Some(id), Some(name)) => Some(UserEntity { id, name }),
            _ => None,
        }
    }
}
