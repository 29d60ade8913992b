pub mod account;
pub mod role;
pub mod user;

pub use account::{Account, AccountStatus, OidcConfig};
pub use role::Role;
pub use user::User;
