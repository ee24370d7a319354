pub mod display;
pub mod error;
pub mod heap;
pub mod source;
