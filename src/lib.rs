pub mod config;
pub mod core;
pub mod filter;
pub mod matcher;

pub use crate::core::converter::convert_to_hangul;
pub use crate::core::hangul::includes_hangul;
pub use crate::matcher::{match_hangul, HangulQuery, SearchKind};
