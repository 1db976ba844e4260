//! Entity records, one flat struct per table-backed entity.

pub mod auth;
pub mod profile;
pub mod user;
pub mod user_data;

pub use auth::Auth;
pub use profile::Profile;
pub use user::User;
pub use user_data::UserData;
