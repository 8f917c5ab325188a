//! User record model.

use serde::{Deserialize, Serialize};

/// One user entry of the dataset.
///
/// Records are immutable once parsed. The JSON shape is the wire contract of
/// the search endpoint: `{"id", "name", "age", "about", "gender"}`.
///
/// # Examples
/// ```
/// use user_search::domain::UserRecord;
///
/// let user = UserRecord::new(7, "Ada Lovelace", 36, "Mathematician", "female");
/// assert_eq!(user.name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    id: i64,
    name: String,
    age: i64,
    about: String,
    gender: String,
}

impl UserRecord {
    /// Assemble a record from already normalised values.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i64,
        about: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            about: about.into(),
            gender: gender.into(),
        }
    }

    /// Dataset identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name: first and last name joined by one space.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Age in years.
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Free-text biography.
    pub fn about(&self) -> &str {
        self.about.as_str()
    }

    /// Gender as recorded in the source; not validated.
    pub fn gender(&self) -> &str {
        self.gender.as_str()
    }

    /// Whether `needle` occurs literally in the name or the biography.
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.contains(needle) || self.about.contains(needle)
    }
}
