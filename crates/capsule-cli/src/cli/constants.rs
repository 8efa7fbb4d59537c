//! Shared constants for CLI.

// -------------------------
// Environment variables
// -------------------------

// Service
pub const CAPSULE_MAX_CAPSULES: &str = "CAPSULE_MAX_CAPSULES";

// Commit
pub const CAPSULE_DATASET_GB: &str = "CAPSULE_DATASET_GB";
pub const CAPSULE_AUDIT_RATIO: &str = "CAPSULE_AUDIT_RATIO";
pub const CAPSULE_CACHE_COLD: &str = "CAPSULE_CACHE_COLD";
pub const CAPSULE_REQUEST_FILE: &str = "CAPSULE_REQUEST_FILE";
pub const CAPSULE_COMMITMENT_OUT: &str = "CAPSULE_COMMITMENT_OUT";
pub const CAPSULE_COMMITMENT_IN: &str = "CAPSULE_COMMITMENT_IN";
pub const CAPSULE_VERIFY_OUT: &str = "CAPSULE_VERIFY_OUT";

// Handle
pub const CAPSULE_ENDPOINT: &str = "CAPSULE_ENDPOINT";
pub const CAPSULE_METHOD: &str = "CAPSULE_METHOD";
pub const CAPSULE_BODY_FILE: &str = "CAPSULE_BODY_FILE";
pub const CAPSULE_RESPONSE_OUT: &str = "CAPSULE_RESPONSE_OUT";

// Schema
pub const CAPSULE_SCHEMA_OUT: &str = "CAPSULE_SCHEMA_OUT";

// -------------------------
// Default values
// -------------------------

// File paths
pub const DEFAULT_COMMITMENT_FILE: &str = "commitment.json";

// Parsed values
pub const DEFAULT_METHOD: &str = "POST";
