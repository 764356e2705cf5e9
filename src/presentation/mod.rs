pub mod console;
pub mod views;
