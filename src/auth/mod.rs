//! Authentication module for Biscoint API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Canonical JSON and HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod signature;

pub use credentials::{
    API_KEY_ENV, API_SECRET_ENV, Credentials, CredentialsProvider, EnvCredentials,
    StaticCredentials,
};
pub use signature::{canonical_json, sign_payload, sign_request};
