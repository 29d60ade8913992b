pub mod administrator;
pub mod create;
pub mod show;
pub mod status;

// Re-export handler functions for use in routing
pub use administrator::update_administrator;
pub use create::create;
pub use show::show;
pub use status::update_status;
