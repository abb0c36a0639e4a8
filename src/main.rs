use anyhow::Result;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use vm_carrier::launch::{self, LaunchRequest};

#[derive(Parser, Debug)]
#[command(
    name = "vm_carrier",
    about = "Create a Google Compute Engine instance in another project from a machine image"
)]
struct Args {
    /// The name of the instance to create.
    #[arg(name = "INSTANCE_NAME", value_parser = NonEmptyStringValueParser::new())]
    instance_name: String,

    /// The Google Cloud project ID.
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    project: String,

    /// The compute zone.
    #[arg(long, default_value = "us-central1-b")]
    zone: String,

    /// The source machine image (gcloud compute machine-images list --uri).
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    source_image: String,

    /// The service account email for the instance.
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    service_account: String,

    /// The subnet to deliver the vm to.
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    subnet: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = LaunchRequest {
        instance_name: args.instance_name,
        project: args.project,
        zone: args.zone,
        source_image: args.source_image,
        service_account: args.service_account,
        subnet: args.subnet,
    };

    println!(
        "Creating GCE instance '{}' in project '{}' (zone: {})...",
        request.instance_name, request.project, request.zone
    );

    match launch::run(&request).await {
        Ok(result) => {
            println!(
                "Instance '{}' creation initiated in project '{}' zone '{}'.",
                request.instance_name, request.project, request.zone
            );
            println!(
                "Operation result: {}",
                serde_json::to_string_pretty(&result)?
            );
        }
        Err(e) => {
            eprintln!("Failed to create instance: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
