mod feeding_schedule;

pub use feeding_schedule::FeedingSchedule;
