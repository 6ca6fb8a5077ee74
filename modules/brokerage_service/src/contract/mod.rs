//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::BrokerageApi;
pub use error::BrokerageError;
pub use model::{
    Agent, AgentPatch, Client, ClientPatch, Id, NewAgent, NewClient, NewOwner, NewProperty,
    NewRentalContract, NewSaleContract, NewVisit, Owner, OwnerPatch, Property, PropertyPatch,
    RentalContract, RentalContractPatch, SaleContract, SaleContractPatch, Visit, VisitPatch,
};
