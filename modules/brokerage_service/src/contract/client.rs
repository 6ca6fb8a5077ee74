//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to read and write the
//! brokerage schema. NO HTTP - direct function calls.

use super::error::BrokerageError;
use super::model::{
    Agent, AgentPatch, Client, ClientPatch, Id, NewAgent, NewClient, NewOwner, NewProperty,
    NewRentalContract, NewSaleContract, NewVisit, Owner, OwnerPatch, Property, PropertyPatch,
    RentalContract, RentalContractPatch, SaleContract, SaleContractPatch, Visit, VisitPatch,
};
use async_trait::async_trait;

/// Brokerage service API for inter-module communication
#[async_trait]
pub trait BrokerageApi: Send + Sync {
    // ===== Owner Operations =====

    async fn create_owner(&self, input: NewOwner) -> Result<Owner, BrokerageError>;
    async fn get_owner(&self, id: Id) -> Result<Owner, BrokerageError>;
    async fn list_owners(&self) -> Result<Vec<Owner>, BrokerageError>;
    async fn update_owner(&self, id: Id, patch: OwnerPatch) -> Result<Owner, BrokerageError>;
    /// Cascades to the owner's properties and their visits
    async fn delete_owner(&self, id: Id) -> Result<(), BrokerageError>;
    async fn list_owner_properties(&self, owner_id: Id) -> Result<Vec<Property>, BrokerageError>;

    // ===== Client Operations =====

    async fn create_client(&self, input: NewClient) -> Result<Client, BrokerageError>;
    async fn get_client(&self, id: Id) -> Result<Client, BrokerageError>;
    async fn list_clients(&self) -> Result<Vec<Client>, BrokerageError>;
    async fn update_client(&self, id: Id, patch: ClientPatch) -> Result<Client, BrokerageError>;
    async fn delete_client(&self, id: Id) -> Result<(), BrokerageError>;
    async fn list_client_visits(&self, client_id: Id) -> Result<Vec<Visit>, BrokerageError>;

    // ===== Agent Operations =====

    async fn create_agent(&self, input: NewAgent) -> Result<Agent, BrokerageError>;
    async fn get_agent(&self, id: Id) -> Result<Agent, BrokerageError>;
    async fn list_agents(&self) -> Result<Vec<Agent>, BrokerageError>;
    async fn update_agent(&self, id: Id, patch: AgentPatch) -> Result<Agent, BrokerageError>;
    /// Clears the agent on visits; rejected while a contract references the agent
    async fn delete_agent(&self, id: Id) -> Result<(), BrokerageError>;
    async fn list_agent_visits(&self, agent_id: Id) -> Result<Vec<Visit>, BrokerageError>;

    // ===== Property Operations =====

    async fn create_property(&self, input: NewProperty) -> Result<Property, BrokerageError>;
    async fn get_property(&self, id: Id) -> Result<Property, BrokerageError>;
    async fn list_properties(&self) -> Result<Vec<Property>, BrokerageError>;
    async fn update_property(
        &self,
        id: Id,
        patch: PropertyPatch,
    ) -> Result<Property, BrokerageError>;
    async fn delete_property(&self, id: Id) -> Result<(), BrokerageError>;
    async fn list_property_visits(&self, property_id: Id) -> Result<Vec<Visit>, BrokerageError>;
    async fn get_property_sale_contract(
        &self,
        property_id: Id,
    ) -> Result<Option<SaleContract>, BrokerageError>;
    async fn get_property_rental_contract(
        &self,
        property_id: Id,
    ) -> Result<Option<RentalContract>, BrokerageError>;

    // ===== Visit Operations =====

    async fn create_visit(&self, input: NewVisit) -> Result<Visit, BrokerageError>;
    async fn get_visit(&self, id: Id) -> Result<Visit, BrokerageError>;
    async fn list_visits(&self) -> Result<Vec<Visit>, BrokerageError>;
    async fn update_visit(&self, id: Id, patch: VisitPatch) -> Result<Visit, BrokerageError>;
    async fn delete_visit(&self, id: Id) -> Result<(), BrokerageError>;

    // ===== Sale Contract Operations =====

    async fn create_sale_contract(
        &self,
        input: NewSaleContract,
    ) -> Result<SaleContract, BrokerageError>;
    async fn get_sale_contract(&self, id: Id) -> Result<SaleContract, BrokerageError>;
    async fn list_sale_contracts(&self) -> Result<Vec<SaleContract>, BrokerageError>;
    async fn update_sale_contract(
        &self,
        id: Id,
        patch: SaleContractPatch,
    ) -> Result<SaleContract, BrokerageError>;
    async fn delete_sale_contract(&self, id: Id) -> Result<(), BrokerageError>;

    // ===== Rental Contract Operations =====

    async fn create_rental_contract(
        &self,
        input: NewRentalContract,
    ) -> Result<RentalContract, BrokerageError>;
    async fn get_rental_contract(&self, id: Id) -> Result<RentalContract, BrokerageError>;
    async fn list_rental_contracts(&self) -> Result<Vec<RentalContract>, BrokerageError>;
    async fn update_rental_contract(
        &self,
        id: Id,
        patch: RentalContractPatch,
    ) -> Result<RentalContract, BrokerageError>;
    async fn delete_rental_contract(&self, id: Id) -> Result<(), BrokerageError>;
}
