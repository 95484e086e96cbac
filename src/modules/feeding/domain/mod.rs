pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::FeedingSchedule;
pub use repositories::FeedingScheduleRepository;
