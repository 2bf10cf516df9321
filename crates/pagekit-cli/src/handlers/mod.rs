pub mod info;
pub mod range;
pub mod walk;
