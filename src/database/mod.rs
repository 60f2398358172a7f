pub mod models;
pub mod pool;
pub mod repository;

pub use models::{Favorite, FavoriteTarget, Person, Planet, User};
