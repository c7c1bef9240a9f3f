//! HTTP transport: routing, handlers, and error responses.

pub mod errors;
pub mod server;
pub mod system;
pub mod users;
