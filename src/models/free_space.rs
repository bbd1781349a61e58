//! Kennel free-space value

use std::fmt;

/// Number of free kennel places today, shown exactly as the source wrote it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSpaceValue(String);

impl FreeSpaceValue {
    /// Wrap a fetched payload, dropping the one line ending the source file
    /// is written with. Nothing else is touched.
    pub fn from_payload(payload: &str) -> Self {
        let text = payload
            .strip_suffix("\r\n")
            .or_else(|| payload.strip_suffix('\n'))
            .unwrap_or(payload);
        FreeSpaceValue(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FreeSpaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
