use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use post_service::db::{self, PgPostRepository, PostRepository};
use post_service::handlers;
use post_service::Config;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Post Service
///
/// A minimal HTTP API for short social-media posts.
///
/// # Routes
///
/// - `GET /` - HTML banner
/// - `POST /api/posts` - Create a post
/// - `GET /api/posts` - List posts, newest first
/// - `DELETE /api/posts/{id}` - Delete a post
///
/// The service listens on `POST_SERVICE_PORT` (default 8888) and talks to
/// PostgreSQL via `DATABASE_URL`.
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting post-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let pool = match db::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Connected to database");

    let repo: Arc<dyn PostRepository> = Arc::new(PgPostRepository::new(pool));
    let repo_data = web::Data::new(repo);

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at http://{}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        let cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(repo_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/", web::get().to(handlers::index))
            .service(
                web::scope("/api/posts")
                    .service(
                        web::resource("")
                            .route(web::post().to(handlers::create_post))
                            .route(web::get().to(handlers::list_posts)),
                    )
                    .service(web::resource("/{id}").route(web::delete().to(handlers::delete_post))),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
