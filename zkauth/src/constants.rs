//! Defaults used when an engine is built without explicit settings.

use std::time::Duration;

/// Curve used by [`ZkConfig::default`](crate::ZkConfig::default).
pub const DEFAULT_CURVE: &str = "Ed25519";

/// Hash algorithm used by [`ZkConfig::default`](crate::ZkConfig::default).
pub const DEFAULT_HASH_ALGORITHM: &str = "blake2b";

/// Number of random salt bytes drawn for fresh parameters.
pub const DEFAULT_SALT_SIZE: usize = 16;

/// Token MAC algorithm (HMAC over Blake2b-512).
pub const DEFAULT_TOKEN_ALGORITHM: &str = "HB2B";

/// Value of the `iss` claim on issued tokens.
pub const DEFAULT_ISSUER: &str = "zk-call";

/// Lifetime of an issued token.
pub const DEFAULT_TOKEN_EXPIRY: Duration = Duration::from_secs(10);
