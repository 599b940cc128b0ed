//! Entity ↔ model mappers

mod community;
mod member;
mod mission;
mod proof;
