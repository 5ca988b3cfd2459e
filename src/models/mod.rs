pub mod absence;
pub mod access_event;
pub mod daily_record;
pub mod report;
pub mod sheet;
