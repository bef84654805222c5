/// HTTP handlers for post endpoints
///
/// This module contains handlers for:
/// - Posts: Create, list, and delete posts
/// - The root HTML banner
pub mod posts;

// Re-export handler functions at module level
pub use posts::{create_post, delete_post, index, list_posts};
