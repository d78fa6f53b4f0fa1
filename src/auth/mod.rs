//! Credential hashing, identity tokens and the role gate

pub mod password;
pub mod policy;
pub mod tokens;

pub use password::PasswordHasher;
pub use policy::require_role;
pub use tokens::TokenService;
