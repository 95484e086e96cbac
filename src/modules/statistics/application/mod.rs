pub mod service;

pub use service::ZooStatisticsService;
