use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use features::{achievements, athletes, notifications, performance_tests, scouts, verification};
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::get_athlete_stats,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::set_verification_level,
        athletes::handlers::delete_athlete,
        athletes::handlers::check_in,
        performance_tests::handlers::list_tests,
        performance_tests::handlers::submit_test,
        performance_tests::handlers::verify_test,
        achievements::handlers::list_achievements,
        achievements::handlers::check_achievements,
        scouts::handlers::list_scouts,
        scouts::handlers::get_scout,
        scouts::handlers::create_scout,
        scouts::handlers::record_view,
        notifications::handlers::list_notifications,
        notifications::handlers::mark_read,
        verification::handlers::list_tiers,
        verification::handlers::get_athlete_verification,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteStatsResponse,
            storage::dto::athlete::CheckInResponse,
            storage::dto::performance_test::CreateTestRequest,
            storage::dto::scout::CreateScoutRequest,
            storage::dto::achievement::AchievementListResponse,
            storage::dto::achievement::AchievementCheckResponse,
            storage::dto::verification::TierResponse,
            storage::dto::verification::AthleteVerificationResponse,
            storage::dto::verification::SetVerificationLevelRequest,
            storage::dto::common::PaginationMeta,
            storage::models::Athlete,
            storage::models::SkillsAssessment,
            storage::models::VerificationLevel,
            storage::models::PerformanceTest,
            storage::models::TestType,
            storage::models::Achievement,
            storage::models::AchievementType,
            storage::models::AthleteView,
            storage::models::Scout,
            storage::models::Notification,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete profiles and check-ins"),
        (name = "tests", description = "Performance test submission and verification"),
        (name = "achievements", description = "Unlocked badges"),
        (name = "scouts", description = "Scout profiles and profile views"),
        (name = "notifications", description = "In-app notifications of the caller"),
        (name = "verification", description = "Trust tiers"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

fn app(db: Database, api_keys: ApiKeys) -> Router {
    let athlete_routes = athletes::routes::routes(api_keys.clone())
        .merge(performance_tests::routes::athlete_routes(api_keys.clone()))
        .merge(achievements::routes::athlete_routes(api_keys.clone()))
        .merge(scouts::routes::athlete_routes(api_keys.clone()))
        .merge(verification::routes::athlete_routes());

    let api = Router::new()
        .nest("/athletes", athlete_routes)
        .nest("/tests", performance_tests::routes::routes(api_keys.clone()))
        .nest("/scouts", scouts::routes::routes(api_keys.clone()))
        .nest("/notifications", notifications::routes::routes(api_keys))
        .nest("/verification", verification::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .nest("/api", api)
        .with_state(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Revela API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API_KEYS configured, every protected endpoint will reject requests");
    }

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app(db, api_keys))
        .await
        .context("Server error")?;

    Ok(())
}
