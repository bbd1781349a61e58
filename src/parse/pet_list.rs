//! XML parsing layer for the pet list
//!
//! The list is a `<pets>` collection whose children are tagged with the
//! animal category and hold one text element per field:
//!
//! ```xml
//! <pets>
//!   <Cat>
//!     <species>Persian</species>
//!     <name>Tom</name>
//!     <age>2</age>
//!     <color>Black</color>
//!     <gender>Male</gender>
//!     <price>500.0</price>
//!   </Cat>
//! </pets>
//! ```
//!
//! A broken document fails as a whole; a broken entry fails alone.

use roxmltree::{Document, Node};

use crate::errors::{ParseError, RecordError};
use crate::models::animal::{AnimalRecord, RawAnimalFields};

/// Name of the collection element
pub const COLLECTION_TAG: &str = "pets";

/// One child of the collection, parsed or rejected
#[derive(Debug, Clone, PartialEq)]
pub struct PetEntry {
    /// 0-based position among the collection's element children
    pub position: usize,

    /// Element name of the entry (the category tag as written)
    pub tag: String,

    pub record: Result<AnimalRecord, RecordError>,
}

/// Parsed pet list, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetList {
    pub entries: Vec<PetEntry>,
}

impl PetList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the collection element has no element children
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Valid records, in document order
    pub fn records(&self) -> impl Iterator<Item = &AnimalRecord> {
        self.entries.iter().filter_map(|entry| entry.record.as_ref().ok())
    }
}

/// Parse a pet list document
pub fn parse_pet_list(xml: &str) -> Result<PetList, ParseError> {
    let doc = Document::parse(xml).map_err(|e| ParseError::InvalidXml(e.to_string()))?;

    let collection = doc
        .descendants()
        .find(|node| is_element_named(*node, COLLECTION_TAG))
        .ok_or_else(|| ParseError::MissingCollection(COLLECTION_TAG.to_string()))?;

    let entries = collection
        .children()
        .filter(|node| node.is_element())
        .enumerate()
        .map(|(position, node)| {
            let tag = node.tag_name().name().to_string();
            let record = AnimalRecord::from_raw(&tag, read_fields(node));
            PetEntry {
                position,
                tag,
                record,
            }
        })
        .collect();

    Ok(PetList { entries })
}

fn read_fields(entry: Node) -> RawAnimalFields {
    RawAnimalFields {
        species: field_text(entry, "species"),
        name: field_text(entry, "name"),
        age: field_text(entry, "age"),
        color: field_text(entry, "color"),
        gender: field_text(entry, "gender"),
        price: field_text(entry, "price"),
    }
}

/// Text content of the first descendant element with the given name
fn field_text(entry: Node, field: &str) -> Option<String> {
    entry
        .descendants()
        .skip(1)
        .find(|node| is_element_named(*node, field))
        .map(text_content)
}

/// Concatenated text of all descendant text nodes
fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn is_element_named(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}
