//! CLI command handlers.

/// Starter rule file creation.
pub mod init;
/// Rule listing and inspection.
pub mod rules;
/// File scanning against the rule catalog.
pub mod scan;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;
