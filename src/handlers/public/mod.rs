// Public handlers: no authentication required.
// Catalog reads plus the login endpoint for token acquisition.

pub mod auth;
pub mod catalog;
