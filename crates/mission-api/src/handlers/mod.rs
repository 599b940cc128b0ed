//! Request handlers organized by resource

pub mod auth;
pub mod communities;
pub mod health;
pub mod members;
pub mod proofs;
