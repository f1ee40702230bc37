//! Streaming alignment over the WebSocket channel.
//!
//! Demonstrates:
//! - Opening an alignment channel
//! - Printing progress notifications as they arrive
//! - Receiving the aligned result
//!
//! Usage:
//!   CATSNAP_HOST=catsnap.example.org cargo run --example align_socket
//!   CATSNAP_HOST=localhost:8080 CATSNAP_INSECURE=1 cargo run --example align_socket -- --debug

mod common;

// ============================================================================
// Imports
// ============================================================================

use catsnap_client::{AlignmentJob, Result};

use common::Args;

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let args = Args::parse();
    common::init_logging(args.debug);

    if let Err(e) = run().await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    println!("=== Alignment channel ===\n");

    let client = common::client_from_env()?;
    println!("[Setup] Endpoint: {}\n", client.endpoints().align_socket());

    let job = AlignmentJob::new("demo")
        .with_item("iso1", "MDLSALRVEEVQNVINAMQKILECPICLELIKEPVSTKCDHIFCKFCMLKLLNQKKGPSQCPLCK")
        .with_item("iso2", "MDLSALRVEEVQNVINAMQKILECPICLELIKEPVSTKCDHIFCKFCMLKLLNQKK");

    println!("[1] Submitting job ({} items)...", job.len());
    let channel = client.align_socket(&job).await?;
    println!("    ✓ Channel {}", channel.state());

    let aligned = channel
        .run(|progress| println!("    … {progress}"))
        .await?;

    println!("\n[2] Result for {}:", aligned.query);
    for item in &aligned.items {
        println!("    {:<8} {}", item.name, item.sequence);
    }

    Ok(())
}
