//! Page components for the portfolio.

mod about;
mod contact;
mod gallery;
mod home;

pub use about::About;
pub use contact::Contact;
pub use gallery::Gallery;
pub use home::Home;
