//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the local file system.

pub mod storage;
