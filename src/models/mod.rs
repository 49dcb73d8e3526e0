pub mod comparison;
pub mod sessions;
pub mod songs;
