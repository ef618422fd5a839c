//! HTTP Handlers

mod blog;
mod root;

pub use blog::*;
pub use root::*;
