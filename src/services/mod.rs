pub mod account_service;
pub mod role_service;
pub mod user_service;

pub use account_service::{AccountError, AccountService};
pub use role_service::{RoleError, RoleService};
pub use user_service::{UserError, UserService};

/// Audit actor recorded for user/role writes. Caller identity is not
/// propagated on those paths, so the stamp is a fixed literal.
pub(crate) const SYSTEM_ACTOR: &str = "system";
