use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::analyze_food_image;
use crate::models::ServiceInfo;
use crate::services::FoodAnalyzer;

pub struct AppState {
    pub analyzer: Arc<dyn FoodAnalyzer>,
}

/// `max_upload_bytes = None` leaves request bodies unbounded.
pub fn create_router(analyzer: Arc<dyn FoodAnalyzer>, max_upload_bytes: Option<usize>) -> Router {
    let state = Arc::new(AppState { analyzer });

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/analyze-food-image", post(analyze_food_image))
        .with_state(state)
        .layer(DefaultBodyLimit::disable());

    match max_upload_bytes {
        Some(limit) => {
            log::info!("📏 Upload size limited to {} bytes", limit);
            router.layer(RequestBodyLimitLayer::new(limit))
        }
        None => router,
    }
}

async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        title: "Food Image Analysis API".to_string(),
        description: "API to analyze food images and provide detailed nutritional information \
                      in the specified language."
            .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn health_check() -> &'static str {
    "OK"
}
