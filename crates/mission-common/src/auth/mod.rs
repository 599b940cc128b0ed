//! Authentication utilities (JWT)
//!
//! Social login token issuance lives in the external auth flow; this module
//! only encodes, decodes, and refreshes the JWTs that flow carries.

mod jwt;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
