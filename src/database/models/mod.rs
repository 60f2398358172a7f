pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

pub use favorite::{Favorite, FavoriteTarget};
pub use people::Person;
pub use planet::Planet;
pub use user::User;
