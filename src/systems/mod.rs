pub mod physics;
pub mod trails;
