use agency_registry_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::rate_limit,
    routes, AppState,
};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let registration_api = Router::new()
        .route(
            "/api/register/candidate",
            post(routes::register::register_candidate),
        )
        .route(
            "/api/register/employer",
            post(routes::register::register_employer),
        )
        .route(
            "/api/register/agency",
            post(routes::register::register_agency),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.registration_rps),
            rate_limit::rps_middleware,
        ));

    let admin_api = Router::new()
        .route(
            "/api/candidates",
            get(routes::candidates::list_candidates),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidates::get_candidate)
                .patch(routes::candidates::update_candidate)
                .delete(routes::candidates::delete_candidate),
        )
        .route(
            "/api/candidates/:id/approve",
            patch(routes::candidates::approve_candidate),
        )
        .route(
            "/api/candidates/:id/reject",
            patch(routes::candidates::reject_candidate),
        )
        .route("/api/employers", get(routes::employers::list_employers))
        .route(
            "/api/employers/:id",
            get(routes::employers::get_employer)
                .patch(routes::employers::update_employer)
                .delete(routes::employers::delete_employer),
        )
        .route(
            "/api/employers/:id/approve",
            patch(routes::employers::approve_employer),
        )
        .route(
            "/api/employers/:id/reject",
            patch(routes::employers::reject_employer),
        )
        .route(
            "/api/employers/:id/verify",
            patch(routes::employers::verify_employer),
        )
        .route("/api/agencies", get(routes::agencies::list_agencies))
        .route(
            "/api/agencies/:id",
            get(routes::agencies::get_agency)
                .patch(routes::agencies::update_agency)
                .delete(routes::agencies::delete_agency),
        )
        .route(
            "/api/agencies/:id/approve",
            patch(routes::agencies::approve_agency),
        )
        .route(
            "/api/agencies/:id/reject",
            patch(routes::agencies::reject_agency),
        )
        .route(
            "/api/agencies/:id/verify",
            patch(routes::agencies::verify_agency),
        )
        .route("/api/dashboard/stats", get(routes::dashboard::get_stats))
        .route(
            "/api/dashboard/activity",
            get(routes::dashboard::get_recent_activity),
        )
        .route(
            "/api/export/candidates",
            post(routes::export::export_candidates),
        )
        .route(
            "/api/export/candidates/pdf",
            post(routes::export::export_candidates_pdf),
        )
        .route(
            "/api/export/employers",
            post(routes::export::export_employers),
        )
        .route(
            "/api/export/employers/pdf",
            post(routes::export::export_employers_pdf),
        )
        .route(
            "/api/export/agencies",
            post(routes::export::export_agencies),
        )
        .route(
            "/api/export/agencies/pdf",
            post(routes::export::export_agencies_pdf),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.admin_rps),
            rate_limit::rps_middleware,
        ));

    info!("Serving uploads from: {}", config.uploads_dir);

    let app = base_routes
        .merge(registration_api)
        .merge(admin_api)
        .nest_service(
            "/uploads",
            tower_http::services::ServeDir::new(&config.uploads_dir),
        )
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
