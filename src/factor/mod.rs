pub mod init;
pub mod regularization;
pub mod update_rules;

pub mod engine;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-exports for convenience
pub use engine::{FactorizationSummary, NmfConfig, NmfEngine, UpdateRule};
pub use init::random_initialize;
pub use regularization::compute_u;
