/// Post handlers - HTTP endpoints for post operations
use crate::db::PostRepository;
use crate::error::{AppError, Result};
use crate::validators::validate_content;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// User-facing messages for persistence failures. The underlying error is
// logged server-side and never included in the response.
const CREATE_FAILED_MESSAGE: &str = "投稿の作成に失敗しました";
const LIST_FAILED_MESSAGE: &str = "投稿の取得に失敗しました";
const DELETE_FAILED_MESSAGE: &str = "投稿の削除に失敗しました";
const POST_NOT_FOUND_MESSAGE: &str = "投稿が見つかりませんでした";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    // Optional at the serde level so presence is checked by the validator
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
}

/// Root banner
/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>SNS API Server is running!</h1>")
}

/// Create a new post
/// POST /api/posts
pub async fn create_post(
    repo: web::Data<Arc<dyn PostRepository>>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let content = validate_content(req.content.as_deref())?;

    // Empty strings collapse to NULL, same as omitted fields
    let image_url = req.image_url.as_deref().filter(|s| !s.is_empty());
    let user_id = req.user_id.as_deref().filter(|s| !s.is_empty());

    let post = repo
        .create(content, image_url, user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create post");
            AppError::Database(CREATE_FAILED_MESSAGE.to_string())
        })?;

    Ok(HttpResponse::Created().json(post))
}

/// List all posts, newest first
/// GET /api/posts
pub async fn list_posts(repo: web::Data<Arc<dyn PostRepository>>) -> Result<HttpResponse> {
    let posts = repo.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch posts");
        AppError::Database(LIST_FAILED_MESSAGE.to_string())
    })?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Delete a post and return the deleted record
/// DELETE /api/posts/{id}
pub async fn delete_post(
    repo: web::Data<Arc<dyn PostRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let deleted = repo.delete_by_id(id).await.map_err(|e| match e {
        sqlx::Error::RowNotFound => {
            tracing::warn!(post_id = id, "Delete requested for missing post");
            AppError::NotFound(POST_NOT_FOUND_MESSAGE.to_string())
        }
        e => {
            tracing::error!(error = %e, post_id = id, "Failed to delete post");
            AppError::Database(DELETE_FAILED_MESSAGE.to_string())
        }
    })?;

    Ok(HttpResponse::Ok().json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;
    use chrono::Utc;

    #[actix_web::test]
    async fn test_create_request_accepts_camel_case_fields() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"content": "hello", "imageUrl": "https://example.com/a.png", "userId": "user-1"}"#,
        )
        .unwrap();

        assert_eq!(req.content.as_deref(), Some("hello"));
        assert_eq!(req.image_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(req.user_id.as_deref(), Some("user-1"));
    }

    #[actix_web::test]
    async fn test_create_request_fields_default_to_none() {
        let req: CreatePostRequest = serde_json::from_str("{}").unwrap();

        assert!(req.content.is_none());
        assert!(req.image_url.is_none());
        assert!(req.user_id.is_none());
    }

    #[actix_web::test]
    async fn test_post_serializes_in_camel_case() {
        let post = Post {
            id: 1,
            content: "hello".to_string(),
            image_url: None,
            user_id: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["content"], "hello");
        assert!(json["imageUrl"].is_null());
        assert!(json["userId"].is_null());
        assert!(json["createdAt"].is_string());
    }
}
