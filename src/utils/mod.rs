//! Shared utilities.
//!
//! - [`errors`]: application error kinds and HTTP mapping
//! - [`jwt`]: token issuance, verification, and bearer extraction
//! - [`password`]: bcrypt hashing and verification
//! - [`response`]: success response envelope

pub mod errors;
pub mod jwt;
pub mod password;
pub mod response;
