pub mod backends;
pub mod extract;
pub mod prompt;
pub mod router;
pub mod service;
pub mod types;
