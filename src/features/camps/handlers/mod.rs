mod camp_handler;

pub use camp_handler::*;
