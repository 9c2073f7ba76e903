//! Client entity and validated input types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::funding_source::FundingSource;
use crate::types::{DbId, Timestamp};

/// A stored client record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub main_language: String,
    pub secondary_language: Option<String>,
    pub funding_source: FundingSource,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The full set of user-editable fields, already validated.
///
/// Used both to insert a new record and to overwrite an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFields {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub main_language: String,
    pub secondary_language: Option<String>,
    pub funding_source: FundingSource,
}

/// A validated update request.
///
/// `secondary_language` distinguishes three cases:
/// `None` keeps the stored value, `Some(None)` clears it and
/// `Some(Some(_))` replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientUpdate {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub main_language: String,
    pub secondary_language: Option<Option<String>>,
    pub funding_source: FundingSource,
}

impl ClientUpdate {
    /// Resolve against the current record, carrying `secondary_language`
    /// forward when the update did not supply one.
    pub fn apply_to(self, existing: &Client) -> ClientFields {
        let secondary_language = match self.secondary_language {
            Some(value) => value,
            None => existing.secondary_language.clone(),
        };
        ClientFields {
            name: self.name,
            date_of_birth: self.date_of_birth,
            main_language: self.main_language,
            secondary_language,
            funding_source: self.funding_source,
        }
    }
}

impl Client {
    /// True when every editable field equals `fields`.
    pub fn matches(&self, fields: &ClientFields) -> bool {
        self.name == fields.name
            && self.date_of_birth == fields.date_of_birth
            && self.main_language == fields.main_language
            && self.secondary_language == fields.secondary_language
            && self.funding_source == fields.funding_source
    }
}
