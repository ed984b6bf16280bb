pub mod grammar;
pub mod note;
pub mod payload;
