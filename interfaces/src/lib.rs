pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ParseLiteralError, RequestError, MAX_TOPIC_CHARS};
