//! Client records: model, validation, store contract and service.

pub mod memory;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use memory::InMemoryClientStore;
pub use model::{Client, ClientFields, ClientUpdate};
pub use service::ClientService;
pub use store::ClientStore;

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Client";
