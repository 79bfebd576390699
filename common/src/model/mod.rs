pub mod contact;
pub mod hero;
pub mod image;
pub mod product;
pub mod section;
