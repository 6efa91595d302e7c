pub mod analyze;

pub use analyze::analyze_food_image;
