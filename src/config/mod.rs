//! Configuration system
//!
//! Loads ~/.config/techstack/config.yaml with support for:
//! - GitHub Enterprise or test API base URLs
//! - Token lookup through an environment variable
//! - Request timeout and concurrency limits
//! - A default username and fallback stack

mod techstack_config;
pub mod validation;

pub use techstack_config::{TechStackConfig, DEFAULT_API_URL};
pub use validation::{validate_config, validate_config_result, ValidationError};
