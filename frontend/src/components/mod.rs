pub mod entries;
pub mod process_form;
pub mod processed;
pub mod select_all;
