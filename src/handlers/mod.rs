use sqlx::PgPool;

use crate::services::{AccountService, RoleService, UserService};

pub mod accounts;
pub mod roles;
pub mod users;

/// Shared handler state: the injected service components, each holding a
/// clone of the same process-wide pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub accounts: AccountService,
    pub users: UserService,
    pub roles: RoleService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            accounts: AccountService::new(pool.clone()),
            users: UserService::new(pool.clone()),
            roles: RoleService::new(pool.clone()),
            pool,
        }
    }
}
