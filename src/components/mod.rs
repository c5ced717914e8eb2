pub mod faq;
pub mod lift_card;
pub mod loading_screen;
pub mod navbar;
