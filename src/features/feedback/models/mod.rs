mod camp_message;

pub use camp_message::{CampMessage, MessageKind};
