mod registration_handler;

pub use registration_handler::*;
