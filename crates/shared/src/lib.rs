pub mod domain;
pub mod draft;
pub mod error;
pub mod protocol;
