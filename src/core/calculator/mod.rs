pub mod daily;
pub mod direction;
pub mod presence;
pub mod weekly;
