pub mod app;
pub mod import;
pub mod navbar;
pub mod not_found;

pub use app::App;
pub use navbar::Navbar;
pub use not_found::NotFound;
