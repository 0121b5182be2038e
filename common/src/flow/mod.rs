pub mod poll;
pub mod submit;
