use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::QueryRejection,
        Multipart, Query, State,
    },
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::AnalysisError;
use crate::models::AnalyzeResponse;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// `POST /analyze-food-image`
pub async fn analyze_food_image(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AnalysisError> {
    let Query(query) = query.map_err(|e| AnalysisError::InvalidRequest(e.body_text()))?;
    let multipart = multipart.map_err(|e| AnalysisError::InvalidRequest(e.body_text()))?;

    let image = read_file_field(multipart).await?;

    log::info!(
        "📨 Food image received: {} bytes, language={}",
        image.len(),
        query.language
    );

    let analysis = state
        .analyzer
        .analyze_food_image(&image, &query.language)
        .await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

/// Reads the whole `file` field into memory. Other fields are ignored.
async fn read_file_field(mut multipart: Multipart) -> Result<Vec<u8>, AnalysisError> {
    let mut file_data = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AnalysisError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        if content_type != "image/jpeg" {
            log::warn!(
                "⚠️ Upload '{}' declares {}, it will be forwarded as image/jpeg",
                file_name,
                content_type
            );
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AnalysisError::Upload(e.to_string()))?;

        log::debug!("📁 Read upload '{}' ({}, {} bytes)", file_name, content_type, data.len());
        file_data = Some(data.to_vec());
    }

    file_data.ok_or(AnalysisError::MissingFile)
}
