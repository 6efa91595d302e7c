pub mod ai_service;
pub mod openai; // OpenAI-compatible chat completions client
pub mod prompt;

pub use ai_service::FoodAnalyzer;
pub use openai::OpenAIService;
