//! Domain service - business logic orchestration

use super::repository::{
    AgentRepository, ClientRepository, OwnerRepository, PropertyRepository,
    RentalContractRepository, RepositoryError, SaleContractRepository, VisitRepository,
};
use super::validation;
use crate::contract::{
    Agent, AgentPatch, BrokerageError, Client, ClientPatch, Id, NewAgent, NewClient, NewOwner,
    NewProperty, NewRentalContract, NewSaleContract, NewVisit, Owner, OwnerPatch, Property,
    PropertyPatch, RentalContract, RentalContractPatch, SaleContract, SaleContractPatch, Visit,
    VisitPatch,
};
use chrono::NaiveDate;
use std::sync::Arc;

const OWNER: &str = "owner";
const CLIENT: &str = "client";
const AGENT: &str = "agent";
const PROPERTY: &str = "property";
const VISIT: &str = "visit";
const SALE_CONTRACT: &str = "sale_contract";
const RENTAL_CONTRACT: &str = "rental_contract";

/// Repository set the service is built from
#[derive(Clone)]
pub struct Repositories {
    pub owners: Arc<dyn OwnerRepository>,
    pub clients: Arc<dyn ClientRepository>,
    pub agents: Arc<dyn AgentRepository>,
    pub properties: Arc<dyn PropertyRepository>,
    pub visits: Arc<dyn VisitRepository>,
    pub sale_contracts: Arc<dyn SaleContractRepository>,
    pub rental_contracts: Arc<dyn RentalContractRepository>,
}

/// Domain service for the brokerage schema
pub struct Service {
    repos: Repositories,
}

impl Service {
    /// Create a new service instance
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    // ===== Owner Operations =====

    /// Register an owner; the registration date is stamped here
    pub async fn create_owner(&self, input: NewOwner) -> Result<Owner, BrokerageError> {
        validation::validate_new_owner(&input)?;

        let owner = self
            .repos
            .owners
            .create(&input, today())
            .await
            .map_err(|e| write_error(OWNER, e))?;

        tracing::info!(owner_id = owner.id, "Owner registered");
        Ok(owner)
    }

    pub async fn get_owner(&self, id: Id) -> Result<Owner, BrokerageError> {
        self.repos
            .owners
            .find_by_id(id)
            .await
            .map_err(|e| read_error(OWNER, e))?
            .ok_or_else(|| BrokerageError::not_found(OWNER, id))
    }

    pub async fn list_owners(&self) -> Result<Vec<Owner>, BrokerageError> {
        self.repos
            .owners
            .list()
            .await
            .map_err(|e| read_error(OWNER, e))
    }

    pub async fn update_owner(&self, id: Id, patch: OwnerPatch) -> Result<Owner, BrokerageError> {
        validation::validate_owner_patch(&patch)?;

        self.repos
            .owners
            .update(id, &patch)
            .await
            .map_err(|e| write_error(OWNER, e))?
            .ok_or_else(|| BrokerageError::not_found(OWNER, id))
    }

    /// Delete an owner together with their properties and those properties' visits
    pub async fn delete_owner(&self, id: Id) -> Result<(), BrokerageError> {
        let deleted = self
            .repos
            .owners
            .delete(id)
            .await
            .map_err(|e| delete_error(OWNER, id, e))?;
        ensure_deleted(OWNER, id, deleted)
    }

    pub async fn list_owner_properties(&self, owner_id: Id) -> Result<Vec<Property>, BrokerageError> {
        self.get_owner(owner_id).await?;

        self.repos
            .properties
            .find_by_owner(owner_id)
            .await
            .map_err(|e| read_error(PROPERTY, e))
    }

    // ===== Client Operations =====

    /// Register a client; the registration date is stamped here
    pub async fn create_client(&self, input: NewClient) -> Result<Client, BrokerageError> {
        validation::validate_new_client(&input)?;

        let client = self
            .repos
            .clients
            .create(&input, today())
            .await
            .map_err(|e| write_error(CLIENT, e))?;

        tracing::info!(client_id = client.id, "Client registered");
        Ok(client)
    }

    pub async fn get_client(&self, id: Id) -> Result<Client, BrokerageError> {
        self.repos
            .clients
            .find_by_id(id)
            .await
            .map_err(|e| read_error(CLIENT, e))?
            .ok_or_else(|| BrokerageError::not_found(CLIENT, id))
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, BrokerageError> {
        self.repos
            .clients
            .list()
            .await
            .map_err(|e| read_error(CLIENT, e))
    }

    pub async fn update_client(
        &self,
        id: Id,
        patch: ClientPatch,
    ) -> Result<Client, BrokerageError> {
        validation::validate_client_patch(&patch)?;

        self.repos
            .clients
            .update(id, &patch)
            .await
            .map_err(|e| write_error(CLIENT, e))?
            .ok_or_else(|| BrokerageError::not_found(CLIENT, id))
    }

    /// Delete a client and their visits; rejected while a contract names the client
    pub async fn delete_client(&self, id: Id) -> Result<(), BrokerageError> {
        let deleted = self
            .repos
            .clients
            .delete(id)
            .await
            .map_err(|e| delete_error(CLIENT, id, e))?;
        ensure_deleted(CLIENT, id, deleted)
    }

    pub async fn list_client_visits(&self, client_id: Id) -> Result<Vec<Visit>, BrokerageError> {
        self.get_client(client_id).await?;

        self.repos
            .visits
            .find_by_client(client_id)
            .await
            .map_err(|e| read_error(VISIT, e))
    }

    // ===== Agent Operations =====

    pub async fn create_agent(&self, input: NewAgent) -> Result<Agent, BrokerageError> {
        validation::validate_new_agent(&input)?;

        let agent = self
            .repos
            .agents
            .create(&input)
            .await
            .map_err(|e| write_error(AGENT, e))?;

        tracing::info!(agent_id = agent.id, license = %agent.license_number, "Agent hired");
        Ok(agent)
    }

    pub async fn get_agent(&self, id: Id) -> Result<Agent, BrokerageError> {
        self.repos
            .agents
            .find_by_id(id)
            .await
            .map_err(|e| read_error(AGENT, e))?
            .ok_or_else(|| BrokerageError::not_found(AGENT, id))
    }

    pub async fn list_agents(&self) -> Result<Vec<Agent>, BrokerageError> {
        self.repos
            .agents
            .list()
            .await
            .map_err(|e| read_error(AGENT, e))
    }

    pub async fn update_agent(&self, id: Id, patch: AgentPatch) -> Result<Agent, BrokerageError> {
        validation::validate_agent_patch(&patch)?;

        self.repos
            .agents
            .update(id, &patch)
            .await
            .map_err(|e| write_error(AGENT, e))?
            .ok_or_else(|| BrokerageError::not_found(AGENT, id))
    }

    /// Delete an agent; visits keep their row with the agent cleared
    pub async fn delete_agent(&self, id: Id) -> Result<(), BrokerageError> {
        let deleted = self
            .repos
            .agents
            .delete(id)
            .await
            .map_err(|e| delete_error(AGENT, id, e))?;
        ensure_deleted(AGENT, id, deleted)
    }

    pub async fn list_agent_visits(&self, agent_id: Id) -> Result<Vec<Visit>, BrokerageError> {
        self.get_agent(agent_id).await?;

        self.repos
            .visits
            .find_by_agent(agent_id)
            .await
            .map_err(|e| read_error(VISIT, e))
    }

    // ===== Property Operations =====

    /// List a property; publication defaults to today when the input has no date
    pub async fn create_property(&self, input: NewProperty) -> Result<Property, BrokerageError> {
        validation::validate_new_property(&input)?;

        let published_on = input.published_on.unwrap_or_else(today);
        let property = self
            .repos
            .properties
            .create(&input, published_on)
            .await
            .map_err(|e| write_error(PROPERTY, e))?;

        tracing::info!(
            property_id = property.id,
            owner_id = property.owner_id,
            "Property published"
        );
        Ok(property)
    }

    pub async fn get_property(&self, id: Id) -> Result<Property, BrokerageError> {
        self.repos
            .properties
            .find_by_id(id)
            .await
            .map_err(|e| read_error(PROPERTY, e))?
            .ok_or_else(|| BrokerageError::not_found(PROPERTY, id))
    }

    pub async fn list_properties(&self) -> Result<Vec<Property>, BrokerageError> {
        self.repos
            .properties
            .list()
            .await
            .map_err(|e| read_error(PROPERTY, e))
    }

    pub async fn update_property(
        &self,
        id: Id,
        patch: PropertyPatch,
    ) -> Result<Property, BrokerageError> {
        validation::validate_property_patch(&patch)?;

        self.repos
            .properties
            .update(id, &patch)
            .await
            .map_err(|e| write_error(PROPERTY, e))?
            .ok_or_else(|| BrokerageError::not_found(PROPERTY, id))
    }

    /// Delete a property and its visits; rejected while a contract references it
    pub async fn delete_property(&self, id: Id) -> Result<(), BrokerageError> {
        let deleted = self
            .repos
            .properties
            .delete(id)
            .await
            .map_err(|e| delete_error(PROPERTY, id, e))?;
        ensure_deleted(PROPERTY, id, deleted)
    }

    pub async fn list_property_visits(&self, property_id: Id) -> Result<Vec<Visit>, BrokerageError> {
        self.get_property(property_id).await?;

        self.repos
            .visits
            .find_by_property(property_id)
            .await
            .map_err(|e| read_error(VISIT, e))
    }

    pub async fn get_property_sale_contract(
        &self,
        property_id: Id,
    ) -> Result<Option<SaleContract>, BrokerageError> {
        self.get_property(property_id).await?;

        self.repos
            .sale_contracts
            .find_by_property(property_id)
            .await
            .map_err(|e| read_error(SALE_CONTRACT, e))
    }

    pub async fn get_property_rental_contract(
        &self,
        property_id: Id,
    ) -> Result<Option<RentalContract>, BrokerageError> {
        self.get_property(property_id).await?;

        self.repos
            .rental_contracts
            .find_by_property(property_id)
            .await
            .map_err(|e| read_error(RENTAL_CONTRACT, e))
    }

    // ===== Visit Operations =====

    pub async fn create_visit(&self, input: NewVisit) -> Result<Visit, BrokerageError> {
        let visit = self
            .repos
            .visits
            .create(&input)
            .await
            .map_err(|e| write_error(VISIT, e))?;

        tracing::info!(
            visit_id = visit.id,
            property_id = visit.property_id,
            client_id = visit.client_id,
            "Visit scheduled"
        );
        Ok(visit)
    }

    pub async fn get_visit(&self, id: Id) -> Result<Visit, BrokerageError> {
        self.repos
            .visits
            .find_by_id(id)
            .await
            .map_err(|e| read_error(VISIT, e))?
            .ok_or_else(|| BrokerageError::not_found(VISIT, id))
    }

    pub async fn list_visits(&self) -> Result<Vec<Visit>, BrokerageError> {
        self.repos
            .visits
            .list()
            .await
            .map_err(|e| read_error(VISIT, e))
    }

    pub async fn update_visit(&self, id: Id, patch: VisitPatch) -> Result<Visit, BrokerageError> {
        self.repos
            .visits
            .update(id, &patch)
            .await
            .map_err(|e| write_error(VISIT, e))?
            .ok_or_else(|| BrokerageError::not_found(VISIT, id))
    }

    pub async fn delete_visit(&self, id: Id) -> Result<(), BrokerageError> {
        let deleted = self
            .repos
            .visits
            .delete(id)
            .await
            .map_err(|e| delete_error(VISIT, id, e))?;
        ensure_deleted(VISIT, id, deleted)
    }

    // ===== Sale Contract Operations =====

    /// Record a sale; a property carries at most one
    pub async fn create_sale_contract(
        &self,
        input: NewSaleContract,
    ) -> Result<SaleContract, BrokerageError> {
        validation::validate_new_sale_contract(&input)?;

        let contract = self
            .repos
            .sale_contracts
            .create(&input)
            .await
            .map_err(|e| write_error(SALE_CONTRACT, e))?;

        tracing::info!(
            contract_id = contract.id,
            property_id = contract.property_id,
            "Sale contract signed"
        );
        Ok(contract)
    }

    pub async fn get_sale_contract(&self, id: Id) -> Result<SaleContract, BrokerageError> {
        self.repos
            .sale_contracts
            .find_by_id(id)
            .await
            .map_err(|e| read_error(SALE_CONTRACT, e))?
            .ok_or_else(|| BrokerageError::not_found(SALE_CONTRACT, id))
    }

    pub async fn list_sale_contracts(&self) -> Result<Vec<SaleContract>, BrokerageError> {
        self.repos
            .sale_contracts
            .list()
            .await
            .map_err(|e| read_error(SALE_CONTRACT, e))
    }

    pub async fn update_sale_contract(
        &self,
        id: Id,
        patch: SaleContractPatch,
    ) -> Result<SaleContract, BrokerageError> {
        validation::validate_sale_contract_patch(&patch)?;

        self.repos
            .sale_contracts
            .update(id, &patch)
            .await
            .map_err(|e| write_error(SALE_CONTRACT, e))?
            .ok_or_else(|| BrokerageError::not_found(SALE_CONTRACT, id))
    }

    pub async fn delete_sale_contract(&self, id: Id) -> Result<(), BrokerageError> {
        let deleted = self
            .repos
            .sale_contracts
            .delete(id)
            .await
            .map_err(|e| delete_error(SALE_CONTRACT, id, e))?;
        ensure_deleted(SALE_CONTRACT, id, deleted)
    }

    // ===== Rental Contract Operations =====

    /// Record a rental; a property carries at most one
    pub async fn create_rental_contract(
        &self,
        input: NewRentalContract,
    ) -> Result<RentalContract, BrokerageError> {
        validation::validate_new_rental_contract(&input)?;

        let contract = self
            .repos
            .rental_contracts
            .create(&input)
            .await
            .map_err(lease_write_error)?;

        tracing::info!(
            contract_id = contract.id,
            property_id = contract.property_id,
            "Rental contract signed"
        );
        Ok(contract)
    }

    pub async fn get_rental_contract(&self, id: Id) -> Result<RentalContract, BrokerageError> {
        self.repos
            .rental_contracts
            .find_by_id(id)
            .await
            .map_err(|e| read_error(RENTAL_CONTRACT, e))?
            .ok_or_else(|| BrokerageError::not_found(RENTAL_CONTRACT, id))
    }

    pub async fn list_rental_contracts(&self) -> Result<Vec<RentalContract>, BrokerageError> {
        self.repos
            .rental_contracts
            .list()
            .await
            .map_err(|e| read_error(RENTAL_CONTRACT, e))
    }

    pub async fn update_rental_contract(
        &self,
        id: Id,
        patch: RentalContractPatch,
    ) -> Result<RentalContract, BrokerageError> {
        validation::validate_rental_contract_patch(&patch)?;

        // A patch touching one end of the lease is checked against the stored other end.
        // A concurrent write between this read and the update is caught by the
        // storage check constraint instead.
        if patch.start_date.is_some() != patch.end_date.is_some() {
            let current = self.get_rental_contract(id).await?;
            let start = patch.start_date.unwrap_or(current.start_date);
            let end = patch.end_date.unwrap_or(current.end_date);
            if end < start {
                return Err(BrokerageError::validation(
                    "end_date",
                    format!("end date {} is before start date {}", end, start),
                ));
            }
        }

        self.repos
            .rental_contracts
            .update(id, &patch)
            .await
            .map_err(lease_write_error)?
            .ok_or_else(|| BrokerageError::not_found(RENTAL_CONTRACT, id))
    }

    pub async fn delete_rental_contract(&self, id: Id) -> Result<(), BrokerageError> {
        let deleted = self
            .repos
            .rental_contracts
            .delete(id)
            .await
            .map_err(|e| delete_error(RENTAL_CONTRACT, id, e))?;
        ensure_deleted(RENTAL_CONTRACT, id, deleted)
    }
}

// ===== Helper Functions =====

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

fn ensure_deleted(resource: &'static str, id: Id, deleted: bool) -> Result<(), BrokerageError> {
    if !deleted {
        return Err(BrokerageError::not_found(resource, id));
    }
    tracing::info!(resource, id, "Deleted");
    Ok(())
}

/// Classify a failed insert or update
fn write_error(resource: &'static str, err: RepositoryError) -> BrokerageError {
    match err {
        RepositoryError::UniqueViolation(detail) => {
            tracing::debug!(resource, %detail, "Write rejected by unique constraint");
            BrokerageError::Duplicate { resource, detail }
        }
        RepositoryError::ForeignKeyViolation(detail) => {
            tracing::debug!(resource, %detail, "Write references a missing row");
            BrokerageError::InvalidReference { resource, detail }
        }
        RepositoryError::CheckViolation(detail) => {
            tracing::debug!(resource, %detail, "Write rejected by check constraint");
            BrokerageError::validation("record", detail)
        }
        RepositoryError::Other(e) => {
            tracing::error!(resource, error = %e, "Storage write failed");
            BrokerageError::Internal
        }
    }
}

/// The lease date check is the only check constraint on rental contracts
fn lease_write_error(err: RepositoryError) -> BrokerageError {
    match err {
        RepositoryError::CheckViolation(detail) => {
            tracing::debug!(%detail, "Lease dates rejected by storage");
            BrokerageError::validation("end_date", "end date is before start date")
        }
        other => write_error(RENTAL_CONTRACT, other),
    }
}

/// Classify a failed delete; a foreign-key failure means a protected reference
fn delete_error(resource: &'static str, id: Id, err: RepositoryError) -> BrokerageError {
    match err {
        RepositoryError::ForeignKeyViolation(detail) => {
            tracing::warn!(resource, id, %detail, "Delete rejected by protected reference");
            BrokerageError::Protected {
                resource,
                id: id.to_string(),
            }
        }
        other => write_error(resource, other),
    }
}

fn read_error(resource: &'static str, err: RepositoryError) -> BrokerageError {
    tracing::error!(resource, error = %err, "Storage read failed");
    BrokerageError::Internal
}
