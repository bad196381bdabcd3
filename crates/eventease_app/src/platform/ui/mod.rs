pub mod bubble;
pub mod constants;
pub mod render;
