// Protected handlers: bearer token required.
// The auth middleware injects AuthUser into request extensions before
// any handler in this tier runs.

pub mod auth;
pub mod favorites;
