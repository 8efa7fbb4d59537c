//! CLI-independent configuration types.

/// Dataset size used when a request does not name one, in gigabytes.
pub const DEFAULT_DATASET_GB: f64 = 500.0;
/// Audit ratio used when a request does not name one.
pub const DEFAULT_AUDIT_RATIO: f64 = 10.0;
/// Cache state used when a request does not name one.
pub const DEFAULT_CACHE_WARM: bool = true;
/// Largest commitment a single call may build (2^16 capsules).
///
/// A tree over `n` capsules holds about `3n` hex strings of 64 bytes each, roughly 16 MB at this
/// limit. Raising it scales memory linearly.
pub const DEFAULT_MAX_CAPSULE_COUNT: u64 = 65_536;

/// Values substituted for fields missing from a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorDefaults {
    /// Dataset size, in gigabytes.
    pub dataset_gb: f64,
    /// Audit ratio.
    pub audit_ratio: f64,
    /// Whether the simulated cache is warm.
    pub cache_warm: bool,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            dataset_gb: DEFAULT_DATASET_GB,
            audit_ratio: DEFAULT_AUDIT_RATIO,
            cache_warm: DEFAULT_CACHE_WARM,
        }
    }
}

/// Bounds applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceLimits {
    /// Maximum number of capsules a generation call may commit to.
    pub max_capsule_count: u64,
}

impl Default for ServiceLimits {
    fn default() -> Self {
        Self {
            max_capsule_count: DEFAULT_MAX_CAPSULE_COUNT,
        }
    }
}

/// Configuration owned by a [`crate::CommitmentService`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServiceConfig {
    /// Request defaults.
    pub defaults: GeneratorDefaults,
    /// Request bounds.
    pub limits: ServiceLimits,
}
