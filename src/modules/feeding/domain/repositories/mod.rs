mod feeding_schedule_repository;

pub use feeding_schedule_repository::FeedingScheduleRepository;

#[cfg(test)]
pub use feeding_schedule_repository::MockFeedingScheduleRepository;
