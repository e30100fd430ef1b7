mod registration;

pub use registration::{Registration, RegistrationRecord};
