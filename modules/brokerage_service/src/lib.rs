//! Brokerage Service Module
//!
//! Persistent schema for a real-estate brokerage: owners, clients, agents,
//! properties, visits, and sale and rental contracts, with the integrity
//! rules that tie them together.

// Public exports
pub mod contract;
pub use contract::{
    Agent, BrokerageApi, BrokerageError, Client, Owner, Property, RentalContract, SaleContract,
    Visit,
};

pub mod config;
pub use config::{Config, DatabaseConfig};

pub mod module;
pub use module::BrokerageModule;

pub use infra::storage::migrations::Migrator;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
