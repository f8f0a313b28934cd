use crate::{
    api::error,
    modules::user::{
        model::InsertUser,
        query::UserQuery,
        repository::UserRepository,
        schema::{UserEntity, UserRow},
    },
    utils::pagination::{Page, Pageable},
};

#[derive(Clone)]
pub struct UserRepositoryPg {
    pool: sqlx::PgPool,
}

impl UserRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryPg {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, error::SystemError> {
        let user = sqlx::query_as::<_, UserEntity>("SELECT id, name FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_all(&self, pageable: &Pageable) -> Result<Page<UserEntity>, error::SystemError> {
        let users = sqlx::query_as::<_, UserEntity>(
            "SELECT id, name FROM users ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(pageable.size())
        .bind(pageable.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = self.count().await?;
        Ok(Page::new(users, *pageable, total))
    }

    async fn count(&self) -> Result<i64, error::SystemError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError> {
        let user = sqlx::query_as::<_, UserEntity>(
            "INSERT INTO users (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&user.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, error::SystemError> {
        let rows = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }

    async fn find_page(
        &self,
        query: &UserQuery,
    ) -> Result<Vec<Option<UserEntity>>, error::SystemError> {
        // has index on (name); id is the primary key
        let mut select = query.select_sql();
        let slots = select
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(UserRow::into_entity)
            .collect();
        Ok(slots)
    }
}
