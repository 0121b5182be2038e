pub mod fixed;
pub mod flow;
pub mod form;
pub mod model;
