pub mod analysis;
pub mod case;
pub mod conversation;
pub mod rubric;
