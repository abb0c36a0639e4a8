use anyhow::Result;
use serde_json::Value;

use crate::gcp::gce::types::InstanceRequest;
use crate::gcp::get_access_token;

const GCE_API_BASE: &str = "https://compute.googleapis.com/compute/v1";

/// Creates a GCE instance by submitting `instance_request` to the
/// `instances.insert` endpoint for `project_id`/`zone`.
///
/// Returns the operation resource the API answers with. Exactly one request
/// is made; errors are returned to the caller without retrying.
pub async fn create_instance(
    project_id: &str,
    zone: &str,
    instance_request: &InstanceRequest,
) -> Result<Value> {
    let token = get_access_token().await?;
    insert_instance(GCE_API_BASE, &token, project_id, zone, instance_request).await
}

async fn insert_instance(
    api_base: &str,
    token: &str,
    project_id: &str,
    zone: &str,
    instance_request: &InstanceRequest,
) -> Result<Value> {
    let client = &*crate::client::CLIENT;
    let url = format!(
        "{}/projects/{}/zones/{}/instances",
        api_base, project_id, zone
    );

    let response = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", token))
        .header("Content-Type", "application/json")
        .json(instance_request)
        .send()
        .await?;

    if !response.status().is_success() {
        let error_text = response.text().await?;
        return Err(anyhow::anyhow!("Failed to create instance: {}", error_text));
    }

    let result: Value = response.json().await?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gcp::gce::request::build_instance_request;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> InstanceRequest {
        build_instance_request(
            "vm1",
            "projects/proj-b/global/machineImages/img1",
            "sa@proj-a.iam.gserviceaccount.com",
            "projects/proj-a/regions/us-central1/subnetworks/sub1",
        )
    }

    #[tokio::test]
    async fn insert_posts_body_and_returns_operation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/proj-a/zones/us-central1-b/instances"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "name": "vm1",
                "sourceMachineImage": "projects/proj-b/global/machineImages/img1",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "compute#operation",
                "operationType": "insert",
                "status": "PENDING",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = insert_instance(
            &server.uri(),
            "test-token",
            "proj-a",
            "us-central1-b",
            &request(),
        )
        .await
        .unwrap();
        assert_eq!(result["operationType"], "insert");
    }

    #[tokio::test]
    async fn insert_failure_surfaces_body_without_retry() {
        let server = MockServer::start().await;
        // expect(1) verifies on drop that exactly one request arrived.
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string("Required 'compute.instances.create' permission"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = insert_instance(
            &server.uri(),
            "test-token",
            "proj-a",
            "us-central1-b",
            &request(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Failed to create instance"));
        assert!(
            err.to_string()
                .contains("Required 'compute.instances.create' permission")
        );
    }
}
