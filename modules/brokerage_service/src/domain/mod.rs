//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{
    AgentRepository, ClientRepository, OwnerRepository, PropertyRepository,
    RentalContractRepository, RepositoryError, SaleContractRepository, VisitRepository,
};
pub use service::{Repositories, Service};
