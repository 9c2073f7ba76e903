//! Row type for the `clients` table.

use chrono::NaiveDate;
use clientbook_core::clients::Client;
use clientbook_core::funding_source::{FundingSource, UnknownFundingSource};
use clientbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `clients` table, as stored.
///
/// `funding_source` is kept as text here and narrowed to [`FundingSource`]
/// when converted into a [`Client`].
#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub id: DbId,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub main_language: String,
    pub secondary_language: Option<String>,
    pub funding_source: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ClientRow> for Client {
    type Error = UnknownFundingSource;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Client {
            id: row.id,
            name: row.name,
            date_of_birth: row.date_of_birth,
            main_language: row.main_language,
            secondary_language: row.secondary_language,
            funding_source: row.funding_source.parse::<FundingSource>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
