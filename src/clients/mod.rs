pub mod gemini;
pub mod recommendation;
pub mod traits;

pub use gemini::GeminiClient;
pub use recommendation::RecommendationClient;
