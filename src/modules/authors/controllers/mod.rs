pub mod author_controller;

pub use author_controller::configure;
