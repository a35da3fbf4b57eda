pub mod app;
pub mod screens;
pub mod utils;
