pub mod date;
pub mod parse;
