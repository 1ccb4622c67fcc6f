pub mod logo;
pub mod parse;
