//! UI Components
//!
//! Reusable Leptos components.

mod back_to_top;
mod career_page;
mod contact_form;
mod footer;
mod home;
mod navbar;
mod not_found;
mod share_menu;
mod toast;

pub use back_to_top::BackToTop;
pub use career_page::{CareerPage, CareerView};
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use home::Home;
pub use navbar::Navbar;
pub use not_found::NotFound;
pub use share_menu::ShareMenu;
pub use toast::Toast;
