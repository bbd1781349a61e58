//! Parsers for the static resources the website reads

pub mod pet_list;

pub use pet_list::{parse_pet_list, PetEntry, PetList};
