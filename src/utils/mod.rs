pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod text;
pub mod time;
