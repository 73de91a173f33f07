//! Content filters for Quill.
//!
//! A filter transforms rendered content (e.g. syntax highlighting of code
//! blocks). Filters are registered by identifier like routers and selected by
//! the rules that render a representation.

mod filter;
mod params;

pub use filter::{BaseFilter, Filter, FilterError};
pub use params::FilterParams;
