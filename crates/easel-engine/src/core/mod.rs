pub mod canvas;
pub mod clock;
pub mod views;
