//! HTTP request handlers organized by entity.

pub mod auth_handler;
pub mod profile_handler;
pub mod user_data_handler;
pub mod user_handler;

pub use auth_handler::*;
pub use profile_handler::*;
pub use user_data_handler::*;
pub use user_handler::*;
