//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Agent, AgentPatch, BrokerageApi, BrokerageError, Client, ClientPatch, Id, NewAgent, NewClient,
    NewOwner, NewProperty, NewRentalContract, NewSaleContract, NewVisit, Owner, OwnerPatch,
    Property, PropertyPatch, RentalContract, RentalContractPatch, SaleContract, SaleContractPatch,
    Visit, VisitPatch,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl BrokerageApi for NativeClient {
    async fn create_owner(&self, input: NewOwner) -> Result<Owner, BrokerageError> {
        self.service.create_owner(input).await
    }

    async fn get_owner(&self, id: Id) -> Result<Owner, BrokerageError> {
        self.service.get_owner(id).await
    }

    async fn list_owners(&self) -> Result<Vec<Owner>, BrokerageError> {
        self.service.list_owners().await
    }

    async fn update_owner(&self, id: Id, patch: OwnerPatch) -> Result<Owner, BrokerageError> {
        self.service.update_owner(id, patch).await
    }

    async fn delete_owner(&self, id: Id) -> Result<(), BrokerageError> {
        self.service.delete_owner(id).await
    }

    async fn list_owner_properties(&self, owner_id: Id) -> Result<Vec<Property>, BrokerageError> {
        self.service.list_owner_properties(owner_id).await
    }

    async fn create_client(&self, input: NewClient) -> Result<Client, BrokerageError> {
        self.service.create_client(input).await
    }

    async fn get_client(&self, id: Id) -> Result<Client, BrokerageError> {
        self.service.get_client(id).await
    }

    async fn list_clients(&self) -> Result<Vec<Client>, BrokerageError> {
        self.service.list_clients().await
    }

    async fn update_client(&self, id: Id, patch: ClientPatch) -> Result<Client, BrokerageError> {
        self.service.update_client(id, patch).await
    }

    async fn delete_client(&self, id: Id) -> Result<(), BrokerageError> {
        self.service.delete_client(id).await
    }

    async fn list_client_visits(&self, client_id: Id) -> Result<Vec<Visit>, BrokerageError> {
        self.service.list_client_visits(client_id).await
    }

    async fn create_agent(&self, input: NewAgent) -> Result<Agent, BrokerageError> {
        self.service.create_agent(input).await
    }

    async fn get_agent(&self, id: Id) -> Result<Agent, BrokerageError> {
        self.service.get_agent(id).await
    }

    async fn list_agents(&self) -> Result<Vec<Agent>, BrokerageError> {
        self.service.list_agents().await
    }

    async fn update_agent(&self, id: Id, patch: AgentPatch) -> Result<Agent, BrokerageError> {
        self.service.update_agent(id, patch).await
    }

    async fn delete_agent(&self, id: Id) -> Result<(), BrokerageError> {
        self.service.delete_agent(id).await
    }

    async fn list_agent_visits(&self, agent_id: Id) -> Result<Vec<Visit>, BrokerageError> {
        self.service.list_agent_visits(agent_id).await
    }

    async fn create_property(&self, input: NewProperty) -> Result<Property, BrokerageError> {
        self.service.create_property(input).await
    }

    async fn get_property(&self, id: Id) -> Result<Property, BrokerageError> {
        self.service.get_property(id).await
    }

    async fn list_properties(&self) -> Result<Vec<Property>, BrokerageError> {
        self.service.list_properties().await
    }

    async fn update_property(
        &self,
        id: Id,
        patch: PropertyPatch,
    ) -> Result<Property, BrokerageError> {
        self.service.update_property(id, patch).await
    }

    async fn delete_property(&self, id: Id) -> Result<(), BrokerageError> {
        self.service.delete_property(id).await
    }

    async fn list_property_visits(&self, property_id: Id) -> Result<Vec<Visit>, BrokerageError> {
        self.service.list_property_visits(property_id).await
    }

    async fn get_property_sale_contract(
        &self,
        property_id: Id,
    ) -> Result<Option<SaleContract>, BrokerageError> {
        self.service.get_property_sale_contract(property_id).await
    }

    async fn get_property_rental_contract(
        &self,
        property_id: Id,
    ) -> Result<Option<RentalContract>, BrokerageError> {
        self.service.get_property_rental_contract(property_id).await
    }

    async fn create_visit(&self, input: NewVisit) -> Result<Visit, BrokerageError> {
        self.service.create_visit(input).await
    }

    async fn get_visit(&self, id: Id) -> Result<Visit, BrokerageError> {
        self.service.get_visit(id).await
    }

    async fn list_visits(&self) -> Result<Vec<Visit>, BrokerageError> {
        self.service.list_visits().await
    }

    async fn update_visit(&self, id: Id, patch: VisitPatch) -> Result<Visit, BrokerageError> {
        self.service.update_visit(id, patch).await
    }

    async fn delete_visit(&self, id: Id) -> Result<(), BrokerageError> {
        self.service.delete_visit(id).await
    }

    async fn create_sale_contract(
        &self,
        input: NewSaleContract,
    ) -> Result<SaleContract, BrokerageError> {
        self.service.create_sale_contract(input).await
    }

    async fn get_sale_contract(&self, id: Id) -> Result<SaleContract, BrokerageError> {
        self.service.get_sale_contract(id).await
    }

    async fn list_sale_contracts(&self) -> Result<Vec<SaleContract>, BrokerageError> {
        self.service.list_sale_contracts().await
    }

    async fn update_sale_contract(
        &self,
        id: Id,
        patch: SaleContractPatch,
    ) -> Result<SaleContract, BrokerageError> {
        self.service.update_sale_contract(id, patch).await
    }

    async fn delete_sale_contract(&self, id: Id) -> Result<(), BrokerageError> {
        self.service.delete_sale_contract(id).await
    }

    async fn create_rental_contract(
        &self,
        input: NewRentalContract,
    ) -> Result<RentalContract, BrokerageError> {
        self.service.create_rental_contract(input).await
    }

    async fn get_rental_contract(&self, id: Id) -> Result<RentalContract, BrokerageError> {
        self.service.get_rental_contract(id).await
    }

    async fn list_rental_contracts(&self) -> Result<Vec<RentalContract>, BrokerageError> {
        self.service.list_rental_contracts().await
    }

    async fn update_rental_contract(
        &self,
        id: Id,
        patch: RentalContractPatch,
    ) -> Result<RentalContract, BrokerageError> {
        self.service.update_rental_contract(id, patch).await
    }

    async fn delete_rental_contract(&self, id: Id) -> Result<(), BrokerageError> {
        self.service.delete_rental_contract(id).await
    }
}
