//! Single-shot instance launch: validated parameters in, one API call out.

use anyhow::{Result, bail};
use log::info;
use serde_json::Value;

use crate::gcp::gce;

/// GCE resource names are capped at 63 characters.
const MAX_INSTANCE_NAME_LEN: usize = 63;

/// Parameters for one instance-creation call. Constructed from CLI
/// arguments, consumed by a single API invocation, then discarded.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub instance_name: String,
    pub project: String,
    pub zone: String,
    pub source_image: String,
    pub service_account: String,
    pub subnet: String,
}

impl LaunchRequest {
    /// Rejects anything this tool refuses to send to the API. Runs before
    /// any token fetch or network call.
    pub fn validate(&self) -> Result<()> {
        if self.instance_name.is_empty() || self.instance_name.len() > MAX_INSTANCE_NAME_LEN {
            bail!(
                "Instance name must be non-empty and no longer than {} characters",
                MAX_INSTANCE_NAME_LEN
            );
        }
        if self.project.is_empty() {
            bail!("Project ID is required");
        }
        if self.zone.is_empty() {
            bail!("Zone is required");
        }
        if self.source_image.is_empty() {
            bail!("Source machine image is required");
        }
        if self.service_account.is_empty() {
            bail!("Service account email is required");
        }
        if self.subnet.is_empty() {
            bail!("Subnet is required");
        }
        Ok(())
    }
}

/// Validates `request`, builds the `instances.insert` body and submits it.
///
/// Returns the operation resource from the API. Exactly one insert call is
/// made; nothing is retried.
pub async fn run(request: &LaunchRequest) -> Result<Value> {
    request.validate()?;
    info!("input validation passed");

    let body = gce::build_instance_request(
        &request.instance_name,
        &request.source_image,
        &request.service_account,
        &request.subnet,
    );

    info!(
        "creating instance '{}' in project '{}' zone '{}'",
        request.instance_name, request.project, request.zone
    );
    let result = gce::create_instance(&request.project, &request.zone, &body).await?;
    info!("instance '{}' creation initiated", request.instance_name);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LaunchRequest {
        LaunchRequest {
            instance_name: "vm1".to_string(),
            project: "proj-a".to_string(),
            zone: "us-central1-b".to_string(),
            source_image: "projects/proj-b/global/machineImages/img1".to_string(),
            service_account: "sa@proj-a.iam.gserviceaccount.com".to_string(),
            subnet: "projects/proj-a/regions/us-central1/subnetworks/sub1".to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn empty_fields_rejected() {
        for field in [
            "instance_name",
            "project",
            "zone",
            "source_image",
            "service_account",
            "subnet",
        ] {
            let mut req = request();
            match field {
                "instance_name" => req.instance_name.clear(),
                "project" => req.project.clear(),
                "zone" => req.zone.clear(),
                "source_image" => req.source_image.clear(),
                "service_account" => req.service_account.clear(),
                "subnet" => req.subnet.clear(),
                _ => unreachable!(),
            }
            assert!(req.validate().is_err(), "empty {} accepted", field);
        }
    }

    #[test]
    fn overlong_instance_name_rejected() {
        let mut req = request();
        req.instance_name = "a".repeat(MAX_INSTANCE_NAME_LEN + 1);
        assert!(req.validate().is_err());
    }

    #[test]
    fn name_at_limit_accepted() {
        let mut req = request();
        req.instance_name = "a".repeat(MAX_INSTANCE_NAME_LEN);
        assert!(req.validate().is_ok());
    }

    #[tokio::test]
    async fn run_rejects_invalid_request_before_any_call() {
        // No server is running anywhere; an attempted network call would
        // surface as a different error than the validation message.
        let mut req = request();
        req.subnet.clear();
        let err = run(&req).await.unwrap_err();
        assert!(err.to_string().contains("Subnet is required"));
    }
}
