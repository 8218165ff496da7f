pub mod compare;
pub mod format;
