mod document;

pub use document::{DocumentKind, UploadedDocument};
