pub mod absence;
pub mod calculator;
pub mod logic;
pub mod normalizer;
pub mod person_filter;
pub mod report;
