pub mod error;
pub mod loader;
pub mod logger;
pub mod validation;
