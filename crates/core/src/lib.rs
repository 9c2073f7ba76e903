//! Domain layer for the client-record service.
//!
//! Holds the client data model, input validation, the record store contract
//! and the service that enforces existence and name-uniqueness rules. Nothing
//! here talks to a database directly; the PostgreSQL store lives in
//! `clientbook-db`.

pub mod clients;
pub mod error;
pub mod funding_source;
pub mod types;
