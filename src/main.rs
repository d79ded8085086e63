//! antipodal CLI entry point
//!
//! Antipode locator - CLI + web app

use antipodal::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
