//! Newsdesk API Routes
//!
//! - /api/gemini - Gemini proxy (POST, OPTIONS preflight)
//! - /swagger-ui - OpenAPI documentation

pub mod proxy;
pub mod swagger;
