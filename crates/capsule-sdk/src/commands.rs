//! Application command implementations.
//!
//! This module contains the core logic for each CLI subcommand.

mod generate;
mod handle;
mod json_file;
mod schema;
mod verify;

pub use generate::{generate_commitment, load_generate_request};
pub use handle::handle_request_file;
pub use schema::{wire_schemas, write_schemas};
pub use verify::verify_commitment;
