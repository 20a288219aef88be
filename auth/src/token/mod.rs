pub mod claims;
pub mod handler;

pub use claims::IdentityClaims;
pub use handler::TokenHandler;
