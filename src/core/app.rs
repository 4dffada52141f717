//! Application identity from Cargo.toml.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Provider tag written to every catalog record's `owned_by`.
pub const PROVIDER: &str = "bedrock";
