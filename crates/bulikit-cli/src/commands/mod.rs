pub mod ast;
pub mod check;
pub mod complete;
pub mod lang_resolver;
pub mod langs;
pub mod source;
pub mod tokens;
