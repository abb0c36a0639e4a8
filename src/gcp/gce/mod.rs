//! # Google Compute Engine (GCE) Client
//!
//! This module provides a client for the `instances.insert` operation of the
//! Google Compute Engine API, used to launch a new VM instance from a
//! machine image.
//!
//! ## Submodules
//! - `client`: Contains the core client logic for making API requests to GCE.
//! - `request`: Builds the `instances.insert` request body from launch parameters.
//! - `types`: Defines the data structures serialized into the GCE API payload.

/// Core client for GCE API requests.
pub mod client;
/// Request-body construction from launch parameters.
pub mod request;
/// Data structures for the GCE API.
pub mod types;

// Re-export key components to provide a convenient public API for this module.
pub use crate::gcp::gce::client::create_instance;
pub use crate::gcp::gce::request::build_instance_request;
pub use crate::gcp::gce::types::*;
