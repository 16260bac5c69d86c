//! Transport layer: wire-format details (paths, query strings, response shapes).

pub mod catalog;
mod endpoint;
mod query;
mod shape;

pub use endpoint::{Method, Request};
pub use query::Query;
pub use shape::{ResponseShape, failure_message, is_success};
