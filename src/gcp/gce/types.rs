//! # Google Compute Engine (GCE) Data Types
//!
//! Rust structs modeling the JSON body of an `instances.insert` API request
//! that launches a VM from a machine image. The image supplies the machine
//! type, disks and scheduling, so only the fields this tool sets are
//! modeled here.
//!
//! For detailed information on each field, refer to the official GCE API
//! documentation.

use serde::Serialize;

/// Request body for creating a new GCE virtual machine instance from a
/// machine image.
#[derive(Debug, Serialize)]
pub struct InstanceRequest {
    /// The name of the instance.
    pub name: String,
    /// The machine image supplying the boot disk and instance shape,
    /// possibly owned by a different project.
    #[serde(rename = "sourceMachineImage")]
    pub source_machine_image: String,
    /// The network interfaces for the instance.
    #[serde(rename = "networkInterfaces")]
    pub network_interfaces: Vec<NetworkInterface>,
    /// The service accounts associated with the instance.
    #[serde(rename = "serviceAccounts")]
    pub service_accounts: Vec<ServiceAccountRef>,
}

/// A network interface for the instance.
#[derive(Debug, Serialize)]
pub struct NetworkInterface {
    pub subnetwork: String,
}

/// A reference to a service account and its scopes.
#[derive(Debug, Serialize)]
pub struct ServiceAccountRef {
    pub email: String,
    pub scopes: Vec<String>,
}
