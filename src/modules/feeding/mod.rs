pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy external access
pub use application::FeedingService;
pub use domain::{FeedingSchedule, FeedingScheduleRepository};
pub use infrastructure::InMemoryFeedingScheduleRepository;
