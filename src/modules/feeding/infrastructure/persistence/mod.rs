mod in_memory_feeding_schedule_repository;

pub use in_memory_feeding_schedule_repository::InMemoryFeedingScheduleRepository;
