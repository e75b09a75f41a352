pub mod u501_ai_consultant;
