pub mod u501_ai_consultant;

pub use u501_ai_consultant::AiConsultant;
