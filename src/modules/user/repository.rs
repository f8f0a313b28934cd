use crate::{
    api::error,
    modules::user::{model::InsertUser, query::UserQuery, schema::UserEntity},
    utils::pagination::{Page, Pageable},
};

#[async_trait::async_trait]
pub trait UserRepository {
    #[allow(unused)]
    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, error::SystemError>;

    /// All users in id order, restricted to the page window.
    #[allow(unused)]
    async fn find_all(&self, pageable: &Pageable) -> Result<Page<UserEntity>, error::SystemError>;

    #[allow(unused)]
    async fn count(&self) -> Result<i64, error::SystemError>;

    /// Inserts a user; the id is assigned by the store.
    #[allow(unused)]
    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError>;

    #[allow(unused)]
    async fn delete(&self, id: i64) -> Result<bool, error::SystemError>;

    /// Executes a built query as a single statement and returns the window it selects.
    /// Slots that did not resolve to an entity come back as `None`.
    async fn find_page(
        &self,
        query: &UserQuery,
    ) -> Result<Vec<Option<UserEntity>>, error::SystemError>;
}
