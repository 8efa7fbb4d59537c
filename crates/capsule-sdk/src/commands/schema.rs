//! JSON Schema export for the wire types.

use std::collections::BTreeMap;
use std::path::PathBuf;

use capsule_core::schema::ErrorResponse;
use capsule_core::schema::generate::{GenerateRequest, GenerateResponse};
use capsule_core::schema::verify::{VerifyRequest, VerifyResponse};
use eyre::Context as _;
use schemars::{Schema, schema_for};
use tracing::info;

/// JSON Schemas of every request and response body, keyed by type name.
#[must_use]
pub fn wire_schemas() -> BTreeMap<&'static str, Schema> {
    BTreeMap::from([
        ("GenerateRequest", schema_for!(GenerateRequest)),
        ("GenerateResponse", schema_for!(GenerateResponse)),
        ("VerifyRequest", schema_for!(VerifyRequest)),
        ("VerifyResponse", schema_for!(VerifyResponse)),
        ("ErrorResponse", schema_for!(ErrorResponse)),
    ])
}

/// Write the wire schemas to `output_file`, or print them when no file is given.
///
/// # Errors
/// Returns an error if serialization to JSON or writing the file fails.
pub async fn write_schemas(output_file: Option<PathBuf>) -> eyre::Result<()> {
    let schemas = serde_json::to_string_pretty(&wire_schemas())?;
    match output_file {
        Some(path) => {
            tokio::fs::write(&path, schemas)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(file = ?path, "Schemas written");
        }
        None => print_schemas(&schemas),
    }
    Ok(())
}

#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
fn print_schemas(schemas: &str) {
    println!("{schemas}");
}
