use std::sync::Arc;

use backoffice_api::app::{build_app, services::AppServices};
use backoffice_infra::LogNotifier;

#[tokio::main]
async fn main() {
    backoffice_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let services = Arc::new(AppServices::in_memory(
        &jwt_secret,
        Arc::new(LogNotifier::new()),
    ));

    if let Err(err) = services.seed_reference_data() {
        tracing::error!(error = %err, "failed to seed reference data");
    }

    match (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD")) {
        (Ok(email), Ok(password)) => match services.seed_admin(&email, &password) {
            Ok(admin) => tracing::info!(email = %admin.email, "seeded admin account"),
            Err(err) => tracing::error!(error = %err, "failed to seed admin account"),
        },
        _ => tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set; no admin account seeded"),
    }

    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
