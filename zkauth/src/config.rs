//! Engine configuration.
//!
//! Names are kept as strings so a configuration file can be loaded first and
//! checked afterwards; [`ZkConfig::validate`] (called by
//! [`ZeroKnowledge::from_config`](crate::ZeroKnowledge::from_config)) turns bad
//! names into [`ZkError::InvalidCurve`] / [`ZkError::UnsupportedAlgorithm`].
//!
//! ```
//! use zkauth::{TokenConfig, ZkConfig};
//!
//! let config = ZkConfig::from_json(
//!     r#"{"curve": "secp256k1", "algorithm": "sha3_256", "token": {"secret": "s3cr3t"}}"#,
//! )
//! .expect("valid config");
//! assert_eq!(config.salt_size, 16);
//! assert_eq!(config.token, Some(TokenConfig::new("s3cr3t")));
//! ```

use core::fmt;

use curve::CurveName;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURVE, DEFAULT_HASH_ALGORITHM, DEFAULT_ISSUER, DEFAULT_SALT_SIZE,
    DEFAULT_TOKEN_ALGORITHM,
};
use crate::errors::ZkError;
use crate::hashing::HashAlgorithm;
use crate::token::TokenAlgorithm;

/// Settings for a [`ZeroKnowledge`](crate::ZeroKnowledge) engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZkConfig {
    /// Curve name, e.g. `secp256k1` or `Ed25519`.
    pub curve: String,
    /// Hash algorithm name, e.g. `sha3-256`.
    pub algorithm: String,
    /// Random salt bytes drawn for fresh parameters.
    pub salt_size: usize,
    /// Token issuance; absent means the engine cannot issue or check tokens.
    pub token: Option<TokenConfig>,
}

impl Default for ZkConfig {
    fn default() -> Self {
        Self {
            curve: DEFAULT_CURVE.to_owned(),
            algorithm: DEFAULT_HASH_ALGORITHM.to_owned(),
            salt_size: DEFAULT_SALT_SIZE,
            token: None,
        }
    }
}

impl ZkConfig {
    pub fn new(curve: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            curve: curve.into(),
            algorithm: algorithm.into(),
            ..Self::default()
        }
    }

    pub fn with_salt_size(mut self, salt_size: usize) -> Self {
        self.salt_size = salt_size;
        self
    }

    pub fn with_token(mut self, token: TokenConfig) -> Self {
        self.token = Some(token);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ZkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves the curve name.
    pub fn curve_name(&self) -> Result<CurveName, ZkError> {
        Ok(self.curve.parse::<CurveName>()?)
    }

    /// Resolves the hash algorithm name.
    pub fn hash_algorithm(&self) -> Result<HashAlgorithm, ZkError> {
        self.algorithm.parse()
    }

    /// Checks every name and size.
    pub fn validate(&self) -> Result<(), ZkError> {
        self.curve_name()?;
        self.hash_algorithm()?;
        if self.salt_size == 0 {
            return Err(ZkError::InvalidParams("salt_size must be positive".into()));
        }
        if let Some(token) = &self.token {
            token.validate()?;
        }
        Ok(())
    }
}

/// Settings for issuing and checking login tokens.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    /// Shared MAC secret.
    pub secret: String,
    /// Token algorithm name, e.g. `HB2B` or `HS256`.
    #[serde(default = "default_token_algorithm")]
    pub algorithm: String,
    /// Expected and issued `iss` claim.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Tolerated clock skew in seconds.
    #[serde(default)]
    pub leeway_secs: u64,
}

fn default_token_algorithm() -> String {
    DEFAULT_TOKEN_ALGORITHM.to_owned()
}

fn default_issuer() -> String {
    DEFAULT_ISSUER.to_owned()
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_token_algorithm(),
            issuer: default_issuer(),
            leeway_secs: 0,
        }
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    pub fn with_leeway_secs(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    pub fn token_algorithm(&self) -> Result<TokenAlgorithm, ZkError> {
        self.algorithm
            .parse()
            .map_err(|_| ZkError::UnsupportedAlgorithm(self.algorithm.clone()))
    }

    pub fn validate(&self) -> Result<(), ZkError> {
        self.token_algorithm()?;
        if self.secret.is_empty() {
            return Err(ZkError::InvalidParams("token secret must not be empty".into()));
        }
        if i64::try_from(self.leeway_secs).is_err() {
            return Err(ZkError::InvalidParams("leeway_secs is out of range".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("algorithm", &self.algorithm)
            .field("issuer", &self.issuer)
            .field("leeway_secs", &self.leeway_secs)
            .finish_non_exhaustive()
    }
}
