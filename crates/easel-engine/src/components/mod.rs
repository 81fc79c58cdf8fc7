pub mod color;
pub mod view;
