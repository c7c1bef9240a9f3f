//! A small user service that filters sensitive fields out of every response
//! by projecting stored records onto an explicit output schema.

pub mod api;
pub mod config;
pub mod db;
pub mod engine;
pub mod telemetry;
