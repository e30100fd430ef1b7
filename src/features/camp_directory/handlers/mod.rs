mod directory_handler;

pub use directory_handler::*;
