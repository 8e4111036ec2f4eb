pub mod expand;
pub mod pattern;
