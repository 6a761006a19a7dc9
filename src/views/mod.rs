mod home;
mod navbar;
mod not_found;

pub use home::Home;
pub use navbar::Navbar;
pub use not_found::NotFound;
