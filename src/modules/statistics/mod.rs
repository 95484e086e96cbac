pub mod application;
pub mod routes;

// Re-exports for easy external access
pub use application::ZooStatisticsService;
