use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Success body of `POST /analyze-food-image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// Typed view of the analysis the model is asked to produce.
/// The endpoint never enforces it; it only backs diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    pub meal_details: MealDetails,
    pub quantity: Quantity,
    pub nutritional_analysis: NutritionalAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDetails {
    pub estimated_meal_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    pub estimated_weight: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalAnalysis {
    pub calories: String,
    pub macronutrients: Macronutrients,
    #[serde(default)]
    pub vitamins: BTreeMap<String, String>,
    #[serde(default)]
    pub minerals: BTreeMap<String, String>,
    #[serde(default)]
    pub other_nutritional_information: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Macronutrients {
    pub proteins: String,
    pub carbohydrates: String,
    pub fats: String,
}

impl FoodAnalysis {
    /// Returns `None` when the value does not follow the schema.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

#[cfg(test)]
pub(crate) const SAMPLE_ANALYSIS: &str = r#"{
    "mealDetails": {
        "estimatedMealName": "Margherita Pizza",
        "description": "Thin crust pizza with tomato sauce, mozzarella and basil"
    },
    "quantity": {
        "estimatedWeight": "250 g"
    },
    "nutritionalAnalysis": {
        "calories": "650 kcal",
        "macronutrients": {
            "proteins": "28 g",
            "carbohydrates": "80 g",
            "fats": "22 g"
        },
        "vitamins": {
            "Vitamin A": "15% DV",
            "Vitamin C": "10% DV"
        },
        "minerals": {
            "Calcium": "40% DV"
        },
        "otherNutritionalInformation": {
            "fiber": "4 g",
            "sodium": "1200 mg"
        }
    }
}"#;
