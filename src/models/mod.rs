//! Data models for the showcase
//!
//! Both models live for a single fetch-and-render cycle.

pub mod animal;
pub mod category;
pub mod free_space;

// Re-export commonly used types
pub use animal::AnimalRecord;
pub use category::Category;
pub use free_space::FreeSpaceValue;
