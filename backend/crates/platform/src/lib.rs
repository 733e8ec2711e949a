//! Platform - Cryptographic primitives shared across domain crates
//!
//! - `password`: Argon2id hashing/verification with policy validation
//! - `token`: JWT access-token issuance/verification and opaque reset tokens

pub mod password;
pub mod token;
