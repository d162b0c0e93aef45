pub(crate) mod episodes;
pub(crate) mod health;

// Re-export all handlers
pub use episodes::process_episodes;
pub use health::{health, HealthResponse};
