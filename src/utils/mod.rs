pub mod colors;
pub mod date;
pub mod http;
pub mod table;
