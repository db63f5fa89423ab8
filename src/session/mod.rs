pub mod parser;
pub mod source;

pub use source::{FileSessionSource, LastCommandSource, SessionSource};
