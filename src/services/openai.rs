use serde::{Deserialize, Serialize};

use super::ai_service::FoodAnalyzer;
use super::prompt::{image_data_url, user_prompt, SYSTEM_PROMPT};
use crate::config::Config;
use crate::error::AnalysisError;
use crate::models::FoodAnalysis;

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ContentPart {
    Text {
        #[serde(rename = "type")]
        content_type: String,
        text: String,
    },
    ImageUrl {
        #[serde(rename = "type")]
        content_type: String,
        image_url: ImageData,
    },
}

#[derive(Debug, Serialize)]
struct ImageData {
    url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAIService {
    api_key: String,
    model: String,
    max_tokens: u32,
    completions_url: String,
    client: reqwest::Client,
}

impl OpenAIService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            completions_url: config.completions_url(),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, image: &[u8], language: &str) -> ChatRequest {
        let data_url = image_data_url(image);
        log::debug!("🔄 Base64 data URL size: {} bytes", data_url.len());

        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
            },
            ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        content_type: "text".to_string(),
                        text: user_prompt(language),
                    },
                    ContentPart::ImageUrl {
                        content_type: "image_url".to_string(),
                        image_url: ImageData { url: data_url },
                    },
                ]),
            },
        ];

        ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait::async_trait]
impl FoodAnalyzer for OpenAIService {
    async fn analyze_food_image(
        &self,
        image: &[u8],
        language: &str,
    ) -> Result<serde_json::Value, AnalysisError> {
        log::debug!("📸 Starting image analysis: {} bytes, language={}", image.len(), language);

        let request = self.build_request(image, language);

        log::info!("🤖 Sending request to OpenAI with model: {}", self.model);

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        log::debug!("📥 OpenAI response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            log::error!("❌ OpenAI API error response: {}", error_text);
            return Err(AnalysisError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_text = response.text().await?;
        log::info!("📄 Raw OpenAI response: {}", response_text);

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            AnalysisError::UnexpectedResponse(format!("Failed to decode AI response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::UnexpectedResponse("AI response contained no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| AnalysisError::UnexpectedResponse("AI response message had no content".to_string()))?;

        log::info!("💬 OpenAI response content: {}", content);

        let analysis: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            log::warn!("⚠️ AI model returned non-JSON content: {}", e);
            AnalysisError::InvalidJson
        })?;

        match FoodAnalysis::from_value(&analysis) {
            Some(parsed) => log::info!(
                "✅ Analysis ready: {} ({})",
                parsed.meal_details.estimated_meal_name,
                parsed.nutritional_analysis.calories
            ),
            None => log::warn!("⚠️ AI response is valid JSON but does not follow the analysis schema"),
        }

        Ok(analysis)
    }
}
