//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    Agent, AgentPatch, Client, ClientPatch, Id, NewAgent, NewClient, NewOwner, NewProperty,
    NewRentalContract, NewSaleContract, NewVisit, Owner, OwnerPatch, Property, PropertyPatch,
    RentalContract, RentalContractPatch, SaleContract, SaleContractPatch, Visit, VisitPatch,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Storage failure, classified by the constraint that rejected the write
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique index rejected the row
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A foreign key rejected the write (missing parent, or protected child on delete)
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    /// A check constraint rejected the row (lease ending before it starts)
    #[error("check constraint violated: {0}")]
    CheckViolation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository for owners
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Insert an owner with the given registration date
    async fn create(&self, input: &NewOwner, registered_on: NaiveDate) -> RepoResult<Owner>;

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Owner>>;

    /// All owners ordered by id
    async fn list(&self) -> RepoResult<Vec<Owner>>;

    /// Apply a partial update; `None` when the row does not exist
    async fn update(&self, id: Id, patch: &OwnerPatch) -> RepoResult<Option<Owner>>;

    /// Delete by id; `false` when nothing was deleted
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

/// Repository for clients
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, input: &NewClient, registered_on: NaiveDate) -> RepoResult<Client>;
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Client>>;
    async fn list(&self) -> RepoResult<Vec<Client>>;
    async fn update(&self, id: Id, patch: &ClientPatch) -> RepoResult<Option<Client>>;
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

/// Repository for agents
#[async_trait]
pub trait AgentRepository: Send + Sync {
    async fn create(&self, input: &NewAgent) -> RepoResult<Agent>;
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Agent>>;
    async fn list(&self) -> RepoResult<Vec<Agent>>;
    async fn update(&self, id: Id, patch: &AgentPatch) -> RepoResult<Option<Agent>>;
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

/// Repository for properties
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Insert a property; `published_on` overrides the input's optional date
    async fn create(&self, input: &NewProperty, published_on: NaiveDate)
        -> RepoResult<Property>;
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Property>>;
    async fn list(&self) -> RepoResult<Vec<Property>>;

    /// Properties of one owner ordered by id
    async fn find_by_owner(&self, owner_id: Id) -> RepoResult<Vec<Property>>;

    async fn update(&self, id: Id, patch: &PropertyPatch) -> RepoResult<Option<Property>>;
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

/// Repository for visits
#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn create(&self, input: &NewVisit) -> RepoResult<Visit>;
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Visit>>;
    async fn list(&self) -> RepoResult<Vec<Visit>>;
    async fn find_by_property(&self, property_id: Id) -> RepoResult<Vec<Visit>>;
    async fn find_by_client(&self, client_id: Id) -> RepoResult<Vec<Visit>>;
    async fn find_by_agent(&self, agent_id: Id) -> RepoResult<Vec<Visit>>;
    async fn update(&self, id: Id, patch: &VisitPatch) -> RepoResult<Option<Visit>>;
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

/// Repository for sale contracts
#[async_trait]
pub trait SaleContractRepository: Send + Sync {
    async fn create(&self, input: &NewSaleContract) -> RepoResult<SaleContract>;
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<SaleContract>>;
    async fn list(&self) -> RepoResult<Vec<SaleContract>>;

    /// The property's sale contract, if one exists
    async fn find_by_property(&self, property_id: Id) -> RepoResult<Option<SaleContract>>;

    async fn update(&self, id: Id, patch: &SaleContractPatch)
        -> RepoResult<Option<SaleContract>>;
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}

/// Repository for rental contracts
#[async_trait]
pub trait RentalContractRepository: Send + Sync {
    async fn create(&self, input: &NewRentalContract) -> RepoResult<RentalContract>;
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RentalContract>>;
    async fn list(&self) -> RepoResult<Vec<RentalContract>>;
    async fn find_by_property(&self, property_id: Id) -> RepoResult<Option<RentalContract>>;
    async fn update(
        &self,
        id: Id,
        patch: &RentalContractPatch,
    ) -> RepoResult<Option<RentalContract>>;
    async fn delete(&self, id: Id) -> RepoResult<bool>;
}
