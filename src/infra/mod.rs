//! Infrastructure adapters: the HTTP resource clients and telemetry.

pub mod api;
pub mod error;
pub mod telemetry;
