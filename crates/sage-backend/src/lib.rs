//! Infrastructure layer for the SAGE chat client.
//!
//! Implements the domain-layer seams: the REST backend gateway over
//! `reqwest`, the wire DTOs it translates at the boundary, the local
//! key-value stores, and client identity persistence.

pub mod dto;
pub mod identity;
pub mod rest;
pub mod store;

pub use identity::{take_show_onboarding, ClientIdentity};
pub use rest::RestGateway;
pub use store::{JsonFileStore, MemoryStore};
