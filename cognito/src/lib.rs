mod client;
mod filter;
mod models;

pub use client::{CognitoError, UserPoolClient};
pub use filter::VerifiedEmailFilter;
pub use models::*;
