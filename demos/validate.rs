//! Validate addresses from the command line
//!
//! Each argument is validated as one address; with no arguments, one address
//! is read per line from stdin. Set `RUST_LOG=us_address_rs=debug` to see the
//! pipeline's tracing output and `US_ADDRESS_BACKEND` to pick a backend.

use std::io::BufRead;
use tracing_subscriber::EnvFilter;
use us_address_rs::{AddressValidator, RequestContext, ValidatorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let validator = AddressValidator::with_config(ValidatorConfig::from_env()?)?;

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        std::io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        inputs
    };

    for (i, raw) in inputs.iter().enumerate() {
        let ctx = RequestContext::new().with_request_id(format!("line-{}", i + 1));
        println!("\nOriginal: {raw}");

        match validator.parse_and_validate(&ctx, raw) {
            Ok(resp) => {
                let addr = &resp.address;
                println!("  Street: {}", addr.street_address);
                println!("  City: {}", addr.city);
                println!("  State: {}", addr.state);
                println!("  Postal code: {}", addr.postal_code);
                println!("  Type: {}", addr.address_type);
                println!(
                    "  Formatted: {}",
                    addr.formatted_address.as_deref().unwrap_or_default()
                );
                for correction in &resp.corrections_applied {
                    println!("  Correction: {correction}");
                }
                for candidate in &resp.candidates {
                    println!(
                        "  Candidate: {}",
                        candidate.formatted_address.as_deref().unwrap_or_default()
                    );
                }
                println!("  {}", resp.message);
            }
            Err(e) => println!("  Error: {e}"),
        }
    }

    Ok(())
}
