mod feedback_dto;

pub use feedback_dto::*;
