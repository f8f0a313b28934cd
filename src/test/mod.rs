//! In-memory `UserRepository` for service and handler tests.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use tokio::sync::RwLock;

use crate::{
    api::error,
    modules::user::{
        model::InsertUser, query::UserQuery, repository::UserRepository, schema::UserEntity,
    },
    utils::pagination::{Page, Pageable},
};

struct Row {
    entity: UserEntity,
    tombstoned: bool,
}

pub struct InMemoryUserRepository {
    rows: RwLock<Vec<Row>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
}

impl InMemoryUserRepository {
    fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Inserts `names` in order, so ids run 1..=names.len().
    pub async fn seeded(names: &[&str]) -> Self {
        let repo = Self::new();
        for name in names {
            repo.create(&InsertUser { name: name.to_string() }).await.unwrap();
        }
        repo
    }

    /// Keeps the row's slot in query results but makes it resolve to nothing.
    pub async fn tombstone(&self, id: i64) {
        let mut rows = self.rows.write().await;
        if let Some(row) = rows.iter_mut().find(|r| r.entity.id == id) {
            row.tombstoned = true;
        }
    }

    pub async fn fail_with_unavailable(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    async fn check_available(&self) -> Result<(), error::SystemError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(error::SystemError::from(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn window<T: Clone>(items: &[T], pageable: &Pageable) -> Vec<T> {
        items
            .iter()
            .skip(pageable.offset() as usize)
            .take(pageable.size() as usize)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, error::SystemError> {
        self.check_available().await?;
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.entity.id == id && !r.tombstoned).map(|r| r.entity.clone()))
    }

    async fn find_all(&self, pageable: &Pageable) -> Result<Page<UserEntity>, error::SystemError> {
        self.check_available().await?;
        let rows = self.rows.read().await;
        let all: Vec<UserEntity> =
            rows.iter().filter(|r| !r.tombstoned).map(|r| r.entity.clone()).collect();
        Ok(Page::new(Self::window(&all, pageable), *pageable, all.len() as i64))
    }

    async fn count(&self) -> Result<i64, error::SystemError> {
        self.check_available().await?;
        Ok(self.rows.read().await.iter().filter(|r| !r.tombstoned).count() as i64)
    }

    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError> {
        self.check_available().await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entity = UserEntity { id, name: user.name.clone() };
        self.rows.write().await.push(Row { entity: entity.clone(), tombstoned: false });
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<bool, error::SystemError> {
        self.check_available().await?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.entity.id != id);
        Ok(rows.len() < before)
    }

    async fn find_page(
        &self,
        query: &UserQuery,
    ) -> Result<Vec<Option<UserEntity>>, error::SystemError> {
        self.check_available().await?;
        let rows = self.rows.read().await;
        let mut matched: Vec<&Row> = rows.iter().filter(|r| query.matches(&r.entity)).collect();
        matched.sort_by(|a, b| query.compare(&a.entity, &b.entity));

        let slots: Vec<Option<UserEntity>> =
            matched.iter().map(|r| (!r.tombstoned).then(|| r.entity.clone())).collect();

        match query.pageable() {
            Some(pageable) => Ok(Self::window(&slots, &pageable)),
            None => Ok(slots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_ids_assigned_by_store() {
        let repo = InMemoryUserRepository::seeded(&["Alice", "Bob"]).await;
        let created = repo.create(&InsertUser { name: "Carol".into() }).await.unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[actix_web::test]
    async fn test_find_and_delete() {
        let repo = InMemoryUserRepository::seeded(&["Alice", "Bob"]).await;
        assert_eq!(repo.find_by_id(2).await.unwrap().unwrap().name, "Bob");
        assert!(repo.delete(2).await.unwrap());
        assert!(!repo.delete(2).await.unwrap());
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_find_all_window() {
        let repo = InMemoryUserRepository::seeded(&["a", "b", "c", "d", "e"]).await;
        let page = repo.find_all(&Pageable::of(1, 2).unwrap()).await.unwrap();
        let ids: Vec<i64> = page.content().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.total_pages(), 3);
    }
}
