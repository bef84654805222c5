/// Post repository - the persistence gateway for posts
///
/// Expected table:
///
/// ```sql
/// CREATE TABLE posts (
///     id         BIGSERIAL PRIMARY KEY,
///     content    TEXT NOT NULL,
///     image_url  TEXT,
///     user_id    TEXT,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
/// );
/// ```
use crate::models::Post;
use async_trait::async_trait;
use sqlx::PgPool;

/// Repository trait for post persistence.
///
/// This trait abstracts database operations to allow for testing and
/// alternative implementations.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and return the stored record.
    ///
    /// `content` must already be validated and trimmed; `image_url` and
    /// `user_id` are stored as NULL when `None`. The database assigns
    /// `id` and `created_at`.
    async fn create(
        &self,
        content: &str,
        image_url: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Post, sqlx::Error>;

    /// Fetch all posts ordered by creation time, newest first.
    async fn find_all(&self) -> Result<Vec<Post>, sqlx::Error>;

    /// Delete a post by id and return the deleted record.
    ///
    /// Fails with `sqlx::Error::RowNotFound` when no post has that id.
    async fn delete_by_id(&self, id: i64) -> Result<Post, sqlx::Error>;
}

/// SQLx-based implementation of PostRepository using PostgreSQL
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new repository with the given database pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(
        &self,
        content: &str,
        image_url: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Post, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (content, image_url, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, image_url, user_id, created_at
            "#,
        )
        .bind(content)
        .bind(image_url)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, sqlx::Error> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, content, image_url, user_id, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn delete_by_id(&self, id: i64) -> Result<Post, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            DELETE FROM posts
            WHERE id = $1
            RETURNING id, content, image_url, user_id, created_at
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }
}
