pub mod app_bar;
pub mod profile_card;
pub mod profile_content;
pub mod profile_picture;
