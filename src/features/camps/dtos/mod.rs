mod camp_dto;

pub use camp_dto::*;
