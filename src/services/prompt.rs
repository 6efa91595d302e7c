use base64::{engine::general_purpose, Engine};

pub const SYSTEM_PROMPT: &str = "You are a food analysis assistant. Always respond with a **valid JSON object** \
that adheres to this schema:\n\n\
{\n    \"mealDetails\": {\n        \"estimatedMealName\": \"<string>\",\n        \"description\": \"<string>\"\n    },\n    \
\"quantity\": {\n        \"estimatedWeight\": \"<string>\"\n    },\n    \
\"nutritionalAnalysis\": {\n        \"calories\": \"<string>\",\n        \
\"macronutrients\": {\n            \"proteins\": \"<string>\",\n            \"carbohydrates\": \"<string>\",\n            \"fats\": \"<string>\"\n        },\n        \
\"vitamins\": {\n            \"<vitaminName>\": \"<string>\"\n        },\n        \
\"minerals\": {\n            \"<mineralName>\": \"<string>\"\n        },\n        \
\"otherNutritionalInformation\": {\n            \"<key>\": \"<value>\"\n        }\n    }\n}\n\n\
Respond with nothing else but the JSON object. ";

/// User instruction. `language` goes in verbatim.
pub fn user_prompt(language: &str) -> String {
    format!(
        "Analyze this food image. Respond in {}. Predict the meal name, estimate its \
         quantity (in grams), and provide a detailed nutrition analysis including calories, \
         proteins, carbs, fats, vitamins, and minerals.",
        language
    )
}

/// Always declared as JPEG, whatever the upload really is.
pub fn image_data_url(image: &[u8]) -> String {
    let base64_image = general_purpose::STANDARD.encode(image);
    format!("data:image/jpeg;base64,{}", base64_image)
}
