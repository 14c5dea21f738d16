pub mod app;
pub mod character_menu;
pub mod characters;
pub mod hero;
pub mod info;
pub mod intro_overlay;
pub mod revealed_page;

pub use app::App;
