pub mod logger;
pub mod slot_detection;
