// In-memory account registry: registration, login and enumeration.

pub mod handlers;
pub mod models;
pub mod registry;
pub mod token;

use thiserror::Error;

pub use registry::AccountRegistry;
pub use token::PlaceholderTokenIssuer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Username and password required")]
    MissingCredentials,

    #[error("User already exists")]
    AlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,
}
