use log::{debug, info};
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::model::UserResponse;
use crate::modules::user::query::{Direction, Predicate, UserField, UserQuery};
use crate::modules::user::repository::UserRepository;
use crate::utils::pagination::Pageable;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    /// Users whose name equals `name` exactly, or all users when `name` is `None`,
    /// in id order and restricted to the page window.
    pub async fn search_by_name(
        &self,
        name: Option<String>,
        pageable: Pageable,
    ) -> Result<Vec<UserResponse>, error::SystemError> {
        let query = UserQuery::select_users()
            .where_and([Predicate::name_eq(name.as_deref())])
            .order_by(UserField::Id, Direction::Asc)
            .paged(pageable);

        let users: Vec<UserResponse> = self
            .repo
            .find_page(&query)
            .await?
            .into_iter()
            .flatten()
            .map(UserResponse::from)
            .collect();

        debug!(
            "Search name={:?} page={} size={} returned {}",
            name,
            pageable.page(),
            pageable.size(),
            users.len()
        );
        Ok(users)
    }
}
