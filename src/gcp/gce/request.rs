//! # GCE Instance Request Construction
//!
//! Builds `InstanceRequest` bodies from the launch parameters. Every
//! parameter is passed through unchanged; the only thing added is the
//! OAuth scope attached to the service account.

use crate::gcp::gce::types::*;

/// OAuth scope granted to the attached service account.
const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Builds the `instances.insert` body for launching from a machine image.
///
/// # Arguments
/// * `name` - The name for the new instance.
/// * `source_image` - URI of the source machine image.
/// * `service_account` - Email of the service account to attach.
/// * `subnet` - The subnet the instance's network interface attaches to.
pub fn build_instance_request(
    name: &str,
    source_image: &str,
    service_account: &str,
    subnet: &str,
) -> InstanceRequest {
    InstanceRequest {
        name: name.to_string(),
        source_machine_image: source_image.to_string(),
        network_interfaces: vec![NetworkInterface {
            subnetwork: subnet.to_string(),
        }],
        service_accounts: vec![ServiceAccountRef {
            email: service_account.to_string(),
            scopes: vec![CLOUD_PLATFORM_SCOPE.to_string()],
        }],
    }
}
