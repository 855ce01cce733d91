pub mod common;
pub mod current_track;
