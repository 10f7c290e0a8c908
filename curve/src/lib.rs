//! Named elliptic curves behind a single byte-oriented group interface.
//!
//! This crate resolves a standard curve name (`secp256k1`, `P-256`, `P-384`,
//! `Ed25519`) to a [`Group`] context exposing the group order, the base point,
//! the field size, point arithmetic, and fixed-width point encodings. All
//! arithmetic is delegated to the RustCrypto curve crates and
//! `curve25519-dalek`; nothing here reimplements field or point math.
//!
//! # Example
//!
//! ```
//! use curve::curve_by_name;
//! use num_bigint::BigUint;
//!
//! let group = curve_by_name("secp256k1").expect("known curve");
//! let point = group.mul_generator(&BigUint::from(7u8)).expect("reduced scalar");
//! assert_eq!(point.len(), group.point_len());
//! assert!(group.is_valid_point(&point));
//! ```

mod edwards;
mod errors;
mod group;
mod registry;
mod sec1;

#[cfg(test)]
mod tests;

pub use edwards::Ed25519;
pub use errors::CurveError;
pub use group::Group;
pub use registry::{curve_by_name, CurveName};
pub use sec1::{NistP256, NistP384, Secp256k1};
