pub mod contact;
pub mod hero;
pub mod products;
pub mod sections;
