pub mod claims;
pub mod config;
pub mod errors;
pub mod handler;

pub use claims::IdentityClaims;
pub use config::TokenConfig;
pub use errors::ConfigurationError;
pub use errors::JwtError;
pub use handler::IssuedToken;
pub use handler::JwtHandler;
