//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random ids, HMAC-SHA256, constant-time compare)
//! - Password derivation and verification (PBKDF2-HMAC-SHA512)
//! - Cookie management and HTTPS detection

pub mod cookie;
pub mod crypto;
pub mod password;
