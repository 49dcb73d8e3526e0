pub mod comparison;
pub mod sessions;
