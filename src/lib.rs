//! Client core for the TaskClass school content-management API.
//!
//! Layers mirror the deployment boundaries: `domain` holds the normalized
//! entities, `application` the list-synchronization protocol and session
//! capability, `infra` the HTTP resource clients and telemetry, and
//! `config` the layered settings they are all wired from.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
