// File: services/parkify_backend/src/main.rs
use axum::{routing::get, Router};
use parkify_api::{routes as booked_slots_routes, BookingRepository};
use parkify_common::{config_error, log_result, ParkifyError};
use parkify_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ParkifyError> {
    parkify_common::logging::init();

    let config = load_config().map_err(config_error)?;
    let repository = log_result(
        BookingRepository::from_config(config.storage.as_ref()).await,
        "Booking repository ready",
        "Error opening booking repository",
    )?;
    let repository = Arc::new(repository);

    let app = Router::new()
        .route("/", get(|| async { "Parkify booked-slots service" }))
        .merge(booked_slots_routes(repository));

    #[cfg(feature = "openapi")]
    let app = {
        use parkify_api::openapi::BookedSlotsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        info!("Adding Swagger UI at /docs");
        app.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", BookedSlotsApiDoc::openapi()))
    };

    // The check-in page may be served from another origin.
    let app = app
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Serving bookedSlots at http://{}/bookedSlots", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
