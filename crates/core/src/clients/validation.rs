//! Shape and type checks for inbound client data.
//!
//! Everything here is pure: the functions turn an untrusted [`ClientPayload`]
//! into validated model types or a [`ValidationError`] listing every bad
//! field. Business rules (existence, name uniqueness) live in the service.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::clients::model::{ClientFields, ClientUpdate};
use crate::error::{FieldViolation, ValidationError};
use crate::funding_source::FundingSource;
use crate::types::DbId;

/// Untrusted create/update body as received from the HTTP layer.
///
/// Fields hold raw JSON values so that missing fields and values of the
/// wrong type are reported alongside malformed ones instead of failing
/// deserialization. A JSON `null` reads as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<Value>,

    /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose UTC date is used.
    #[serde(alias = "dob")]
    #[validate(required, custom(function = "past_date"))]
    pub date_of_birth: Option<Value>,

    #[validate(required, custom(function = "not_blank"))]
    pub main_language: Option<Value>,

    #[validate(custom(function = "optional_text"))]
    pub secondary_language: Option<Value>,

    #[validate(required, custom(function = "known_funding_source"))]
    pub funding_source: Option<Value>,
}

/// Validate a create request.
///
/// A blank `secondaryLanguage` is stored as absent.
pub fn validate_create(input: ClientPayload) -> Result<ClientFields, ValidationError> {
    check(&input)?;
    let secondary_language = text(input.secondary_language.as_ref()).and_then(non_blank);
    Ok(ClientFields {
        name: required_text(input.name.as_ref(), "name")?,
        date_of_birth: required_date(input.date_of_birth.as_ref())?,
        main_language: required_text(input.main_language.as_ref(), "mainLanguage")?,
        secondary_language,
        funding_source: required_funding_source(input.funding_source.as_ref())?,
    })
}

/// Validate an update request.
///
/// Field rules match [`validate_create`]. An absent (or `null`)
/// `secondaryLanguage` means "keep the stored value"; a blank string means
/// "clear it".
pub fn validate_update(input: ClientPayload) -> Result<ClientUpdate, ValidationError> {
    check(&input)?;
    let secondary_language = text(input.secondary_language.as_ref()).map(non_blank);
    Ok(ClientUpdate {
        name: required_text(input.name.as_ref(), "name")?,
        date_of_birth: required_date(input.date_of_birth.as_ref())?,
        main_language: required_text(input.main_language.as_ref(), "mainLanguage")?,
        secondary_language,
        funding_source: required_funding_source(input.funding_source.as_ref())?,
    })
}

/// Convert a raw path token into a client id.
pub fn validate_id_param(raw: &str) -> Result<DbId, ValidationError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| ValidationError::field("id", format!("'{raw}' is not a valid integer id")))
}

/// Parse a date of birth in either accepted format.
pub fn parse_date_of_birth(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

// ---------------------------------------------------------------------------
// validator glue
// ---------------------------------------------------------------------------

fn check(input: &ClientPayload) -> Result<(), ValidationError> {
    input.validate().map_err(into_validation_error)
}

fn into_validation_error(errors: validator::ValidationErrors) -> ValidationError {
    let mut fields: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = wire_name(&field.to_string());
            errs.iter().map(move |err| FieldViolation {
                field: field.clone(),
                message: describe(err),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    ValidationError { fields }
}

fn describe(err: &validator::ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None if err.code == "required" => "is required".to_string(),
        None => err.code.to_string(),
    }
}

/// `main_language` -> `mainLanguage`.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn rejection(code: &'static str, message: String) -> validator::ValidationError {
    let mut err = validator::ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

fn string(value: &Value) -> Result<&str, validator::ValidationError> {
    value
        .as_str()
        .ok_or_else(|| rejection("type", "must be a string".to_string()))
}

fn not_blank(value: &Value) -> Result<(), validator::ValidationError> {
    if string(value)?.trim().is_empty() {
        return Err(rejection("blank", "must not be blank".to_string()));
    }
    Ok(())
}

fn optional_text(value: &Value) -> Result<(), validator::ValidationError> {
    string(value).map(|_| ())
}

fn past_date(value: &Value) -> Result<(), validator::ValidationError> {
    let value = string(value)?;
    let Some(date) = parse_date_of_birth(value) else {
        return Err(rejection(
            "date",
            format!("'{value}' is not a valid date (expected YYYY-MM-DD)"),
        ));
    };
    if date >= Utc::now().date_naive() {
        return Err(rejection("past", "must be in the past".to_string()));
    }
    Ok(())
}

fn known_funding_source(value: &Value) -> Result<(), validator::ValidationError> {
    string(value)?.parse::<FundingSource>().map(|_| ()).map_err(|_| {
        let codes: Vec<&str> = FundingSource::ALL.iter().map(|s| s.as_str()).collect();
        rejection("enum", format!("must be one of {}", codes.join(", ")))
    })
}

// ---------------------------------------------------------------------------
// Conversion helpers (inputs are already checked)
// ---------------------------------------------------------------------------

fn text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required_text(value: Option<&Value>, field: &str) -> Result<String, ValidationError> {
    text(value)
        .and_then(non_blank)
        .ok_or_else(|| ValidationError::field(field, "must not be blank"))
}

fn required_date(value: Option<&Value>) -> Result<NaiveDate, ValidationError> {
    text(value)
        .and_then(parse_date_of_birth)
        .ok_or_else(|| ValidationError::field("dateOfBirth", "is not a valid date"))
}

fn required_funding_source(value: Option<&Value>) -> Result<FundingSource, ValidationError> {
    text(value)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| ValidationError::field("fundingSource", "is not a known funding source"))
}
