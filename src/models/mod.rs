pub mod day_summary;
pub mod event;
pub mod event_type;
pub mod status;
pub mod user;
