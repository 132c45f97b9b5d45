pub mod common;
pub mod digest;
pub mod features;
pub mod todos;
