pub mod domain;
pub mod errors;
pub mod state;

// Re-exports for convenience
pub use state::AppState;
