//! Animal records parsed from the pet list
//!
//! Text fields are kept exactly as the source wrote them so cards show the
//! same characters, empty ones included; `age` and `price` are checked to be
//! numeric on the way in.

use super::category::Category;
use crate::errors::RecordError;

/// One animal available for adoption
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalRecord {
    /// Animal type, drives image selection
    pub category: Category,

    /// Species or breed (e.g., "Persian", "Golden Retriever"). The shop
    /// application allows this to be left empty.
    pub species: String,

    pub name: String,

    /// Age in whole years, as written by the source
    pub age: String,

    pub color: String,

    pub gender: String,

    /// Price in dkk, as written by the source (e.g., "500.0")
    pub price: String,
}

/// Field values of one entry before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAnimalFields {
    pub species: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    pub color: Option<String>,
    pub gender: Option<String>,
    pub price: Option<String>,
}

impl AnimalRecord {
    /// Build a record from a category tag and its raw field values.
    ///
    /// Fails on an unknown tag, a missing field, a non-integer age, or a
    /// price that is not a non-negative number. Empty text fields are kept.
    pub fn from_raw(tag: &str, raw: RawAnimalFields) -> Result<Self, RecordError> {
        let category: Category = tag.parse()?;

        let record = AnimalRecord {
            category,
            species: required(tag, "species", raw.species)?,
            name: required(tag, "name", raw.name)?,
            age: required(tag, "age", raw.age)?,
            color: required(tag, "color", raw.color)?,
            gender: required(tag, "gender", raw.gender)?,
            price: required(tag, "price", raw.price)?,
        };

        record.age_years()?;
        record.price_dkk()?;

        Ok(record)
    }

    /// Age as a number of years
    pub fn age_years(&self) -> Result<u32, RecordError> {
        self.age
            .trim()
            .parse::<u32>()
            .map_err(|_| RecordError::InvalidAge(self.age.clone()))
    }

    /// Price as a number of dkk
    pub fn price_dkk(&self) -> Result<f64, RecordError> {
        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
            _ => Err(RecordError::InvalidPrice(self.price.clone())),
        }
    }
}

fn required(tag: &str, field: &'static str, value: Option<String>) -> Result<String, RecordError> {
    match value {
        None => Err(RecordError::MissingField {
            category: tag.to_string(),
            field,
        }),
        Some(text) => Ok(text),
    }
}
