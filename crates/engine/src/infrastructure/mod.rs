//! Infrastructure implementations.
//!
//! Contains the storage port, its adapters, environment configuration and
//! the bridge message translator.

pub mod bridge_translator;
pub mod config;
pub mod ports;
pub mod storage;
