use serde::{Deserialize, Serialize};
use server::model::{ThemeColors, ThemeRow};

/// A named, immutable color palette.
///
/// Catalog entries carry a stable local `id`; themes restored from the
/// theme store carry the store-assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(id: impl Into<String>, name: impl Into<String>, colors: ThemeColors) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors,
        }
    }
}

impl From<ThemeRow> for Theme {
    fn from(row: ThemeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            colors: row.colors,
        }
    }
}
