pub mod contact;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod products;
pub mod section;
