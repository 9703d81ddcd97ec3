use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use activity_service::handlers::{self, FeedHandlerState};
use activity_service::services::{FaultInjection, HomeActivitiesService};
use db_pool::{create_pool, DbConfig};
use sqlx::PgPool;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Latency applied to the home feed when SIMULATE_HOME_LATENCY is enabled
const SIMULATED_FEED_LATENCY: Duration = Duration::from_secs(2);

struct HealthState {
    db_pool: PgPool,
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(&state.db_pool).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "activity-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "activity-service"
        })),
    }
}

/// Activity Service
///
/// A service that handles timed posts and the home feed for a minimal social
/// platform, plus the post-confirmation hook called by the identity provider.
///
/// # Routes
///
/// - `POST /api/activities` - Create a timed post
/// - `GET /api/activities/home` - List the home feed
/// - `POST /hooks/post-confirmation` - Identity-provider confirmation sync
///
/// # Architecture
///
/// - HTTP handlers with request/response conversion
/// - PostgreSQL for persistent storage, pooled via the db-pool crate
/// - Validation outcomes returned as data; store faults become 5xx responses
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Support container healthchecks via CLI subcommand: `healthcheck-http` or legacy `healthcheck`
    {
        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "healthcheck" || cmd == "healthcheck-http" {
                let url = "http://127.0.0.1:8081/api/health";
                match reqwest::Client::new().get(url).send().await {
                    Ok(resp) if resp.status().is_success() => return Ok(()),
                    Ok(resp) => {
                        eprintln!("healthcheck HTTP status: {}", resp.status());
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"));
                    }
                    Err(e) => {
                        eprintln!("healthcheck HTTP error: {}", e);
                        return Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"));
                    }
                }
            }
        }
    }

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
    let config = match activity_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting activity-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    let mut db_cfg = DbConfig::from_env("activity-service").unwrap_or_default();
    if db_cfg.connection_url.is_empty() {
        db_cfg.connection_url = config.database.url.clone();
    }

    db_cfg.log_config();
    let db_pool = match create_pool(db_cfg).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };
    let db_pool_http = db_pool.clone();

    tracing::info!("Connected to database via db-pool crate");

    // Materialize feed fault hooks from configuration; the service itself
    // never reads the environment.
    let faults = FaultInjection {
        delay: config
            .feed_faults
            .simulate_latency
            .then_some(SIMULATED_FEED_LATENCY),
        fail: config.feed_faults.simulate_error,
    };
    if faults.delay.is_some() || faults.fail {
        tracing::warn!(?faults, "home feed fault injection enabled");
    }

    let feed_state = web::Data::new(FeedHandlerState {
        home_activities: Arc::new(HomeActivitiesService::with_faults(db_pool.clone(), faults)),
    });
    let health_state = web::Data::new(HealthState {
        db_pool: db_pool.clone(),
    });

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let allowed_origins = config.cors.allowed_origins.clone();

    let server = HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(db_pool_http.clone()))
            .app_data(feed_state.clone())
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/api/health", web::get().to(health_summary))
            .service(
                web::scope("/api/activities")
                    .route("", web::post().to(handlers::create_activity))
                    .route("/home", web::get().to(handlers::home_activities)),
            )
            .route(
                "/hooks/post-confirmation",
                web::post().to(handlers::post_confirmation),
            )
    })
    .bind(&bind_address)?
    .workers(4)
    .run();

    server.await?;

    tracing::info!("activity-service shutting down");
    Ok(())
}
