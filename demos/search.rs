//! Search lifecycle over HTTP.
//!
//! Demonstrates:
//! - Starting a gene search
//! - Polling progress until the backend reports completion
//! - Fetching results and printing the archive link
//!
//! Usage:
//!   CATSNAP_HOST=catsnap.example.org cargo run --example search -- BRCA1
//!   CATSNAP_HOST=localhost:8080 CATSNAP_INSECURE=1 cargo run --example search -- BRCA1 --debug

mod common;

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use tokio::time::sleep;

use catsnap_client::{Error, Result, SearchStartRequest};

use common::Args;

// ============================================================================
// Constants
// ============================================================================

const DATABASE_TYPE: &str = "refseq";
const SEARCH_TYPE: &str = "gene";
const POLL_INTERVAL: Duration = Duration::from_secs(2);
const MAX_POLLS: u32 = 900;

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let args = Args::parse();
    common::init_logging(args.debug);

    if let Err(e) = run(args).await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let gene = args
        .positional
        .first()
        .cloned()
        .unwrap_or_else(|| "BRCA1".to_string());

    println!("=== Search: {gene} ===\n");

    let client = common::client_from_env()?;

    println!("[1] Starting search...");
    let request = SearchStartRequest::new(DATABASE_TYPE, SEARCH_TYPE).with_gene(&gene);
    let query_id = client.search_start(&request).await?;
    println!("    ✓ Query id: {query_id}\n");

    println!("[2] Polling progress...");
    let mut polls = 0;
    loop {
        let progress = client.get_progress(&query_id).await?;
        println!("    {:>5.1}% {}", progress.progress, progress.description);
        if progress.is_complete() {
            break;
        }

        polls += 1;
        if polls >= MAX_POLLS {
            return Err(Error::search(format!(
                "search {query_id} still at {:.1}% after {MAX_POLLS} polls",
                progress.progress
            )));
        }
        sleep(POLL_INTERVAL).await;
    }
    println!();

    println!("[3] Results:");
    let results = client.get_results(&query_id).await?;
    for query in &results.query_results {
        println!("    {} ({} sequences)", query.query, query.len());
    }

    println!("\n[4] Archive: {}", client.results_archive_url(&query_id));

    Ok(())
}
