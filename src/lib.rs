// # vm_carrier
//
// Library core for the `vm_carrier` binary: create a Google Compute Engine
// instance in a target project from a machine image that may live in a
// different project, wiring in a service account and subnet. The binary
// parses arguments; everything that can run without a terminal lives here.

/// Shared HTTP client.
pub mod client;

/// Google Cloud Platform plumbing: authentication and the GCE instance API.
pub mod gcp;

/// Parameter validation and the single-shot launch call.
pub mod launch;
