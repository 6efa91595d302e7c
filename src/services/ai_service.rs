use crate::error::AnalysisError;

/// Anything that can turn an uploaded image into a nutrition analysis.
#[async_trait::async_trait]
pub trait FoodAnalyzer: Send + Sync {
    /// Returns the model's answer parsed as JSON, untouched.
    async fn analyze_food_image(
        &self,
        image: &[u8],
        language: &str,
    ) -> Result<serde_json::Value, AnalysisError>;
}
