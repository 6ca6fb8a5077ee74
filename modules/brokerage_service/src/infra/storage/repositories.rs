//! SeaORM repository implementations

use super::entity::{agent, client, owner, property, rental_contract, sale_contract, visit};
use super::mapper;
use crate::contract::{
    Agent, AgentPatch, Client, ClientPatch, Id, NewAgent, NewClient, NewOwner, NewProperty,
    NewRentalContract, NewSaleContract, NewVisit, Owner, OwnerPatch, Property, PropertyPatch,
    RentalContract, RentalContractPatch, SaleContract, SaleContractPatch, Visit, VisitPatch,
};
use crate::domain::repository::{
    AgentRepository, ClientRepository, OwnerRepository, PropertyRepository,
    RentalContractRepository, RepoResult, SaleContractRepository, VisitRepository,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

// ===== Owner Repository =====

pub struct SeaOrmOwnerRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOwnerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepository for SeaOrmOwnerRepository {
    async fn create(&self, input: &NewOwner, registered_on: NaiveDate) -> RepoResult<Owner> {
        let result = owner::Entity::insert(mapper::new_owner(input, registered_on))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Owner>> {
        let result = owner::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self) -> RepoResult<Vec<Owner>> {
        let results = owner::Entity::find()
            .order_by_asc(owner::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Id, patch: &OwnerPatch) -> RepoResult<Option<Owner>> {
        let Some(existing) = owner::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let active_model = mapper::owner_patch(id, patch);
        if !active_model.is_changed() {
            return Ok(Some(existing.into()));
        }

        let result = owner::Entity::update(active_model)
            .exec(&*self.db)
            .await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = owner::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Client Repository =====

pub struct SeaOrmClientRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmClientRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn create(&self, input: &NewClient, registered_on: NaiveDate) -> RepoResult<Client> {
        let result = client::Entity::insert(mapper::new_client(input, registered_on))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Client>> {
        let result = client::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self) -> RepoResult<Vec<Client>> {
        let results = client::Entity::find()
            .order_by_asc(client::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Id, patch: &ClientPatch) -> RepoResult<Option<Client>> {
        let Some(existing) = client::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let active_model = mapper::client_patch(id, patch);
        if !active_model.is_changed() {
            return Ok(Some(existing.into()));
        }

        let result = client::Entity::update(active_model)
            .exec(&*self.db)
            .await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = client::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Agent Repository =====

pub struct SeaOrmAgentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAgentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AgentRepository for SeaOrmAgentRepository {
    async fn create(&self, input: &NewAgent) -> RepoResult<Agent> {
        let active_model: agent::ActiveModel = input.into();

        let result = agent::Entity::insert(active_model)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Agent>> {
        let result = agent::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self) -> RepoResult<Vec<Agent>> {
        let results = agent::Entity::find()
            .order_by_asc(agent::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Id, patch: &AgentPatch) -> RepoResult<Option<Agent>> {
        let Some(existing) = agent::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let active_model = mapper::agent_patch(id, patch);
        if !active_model.is_changed() {
            return Ok(Some(existing.into()));
        }

        let result = agent::Entity::update(active_model)
            .exec(&*self.db)
            .await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = agent::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Property Repository =====

pub struct SeaOrmPropertyRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPropertyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PropertyRepository for SeaOrmPropertyRepository {
    async fn create(&self, input: &NewProperty, published_on: NaiveDate) -> RepoResult<Property> {
        let result = property::Entity::insert(mapper::new_property(input, published_on))
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Property>> {
        let result = property::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self) -> RepoResult<Vec<Property>> {
        let results = property::Entity::find()
            .order_by_asc(property::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_owner(&self, owner_id: Id) -> RepoResult<Vec<Property>> {
        let results = property::Entity::find()
            .filter(property::Column::OwnerId.eq(owner_id))
            .order_by_asc(property::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Id, patch: &PropertyPatch) -> RepoResult<Option<Property>> {
        let Some(existing) = property::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let active_model = mapper::property_patch(id, patch);
        if !active_model.is_changed() {
            return Ok(Some(existing.into()));
        }

        let result = property::Entity::update(active_model)
            .exec(&*self.db)
            .await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = property::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Visit Repository =====

pub struct SeaOrmVisitRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVisitRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_where(&self, filter: sea_orm::sea_query::SimpleExpr) -> RepoResult<Vec<Visit>> {
        let results = visit::Entity::find()
            .filter(filter)
            .order_by_asc(visit::Column::VisitDate)
            .order_by_asc(visit::Column::VisitTime)
            .order_by_asc(visit::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl VisitRepository for SeaOrmVisitRepository {
    async fn create(&self, input: &NewVisit) -> RepoResult<Visit> {
        let active_model: visit::ActiveModel = input.into();

        let result = visit::Entity::insert(active_model)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Visit>> {
        let result = visit::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self) -> RepoResult<Vec<Visit>> {
        let results = visit::Entity::find()
            .order_by_asc(visit::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_property(&self, property_id: Id) -> RepoResult<Vec<Visit>> {
        self.find_where(visit::Column::PropertyId.eq(property_id))
            .await
    }

    async fn find_by_client(&self, client_id: Id) -> RepoResult<Vec<Visit>> {
        self.find_where(visit::Column::ClientId.eq(client_id)).await
    }

    async fn find_by_agent(&self, agent_id: Id) -> RepoResult<Vec<Visit>> {
        self.find_where(visit::Column::AgentId.eq(agent_id)).await
    }

    async fn update(&self, id: Id, patch: &VisitPatch) -> RepoResult<Option<Visit>> {
        let Some(existing) = visit::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let active_model = mapper::visit_patch(id, patch);
        if !active_model.is_changed() {
            return Ok(Some(existing.into()));
        }

        let result = visit::Entity::update(active_model)
            .exec(&*self.db)
            .await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = visit::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Sale Contract Repository =====

pub struct SeaOrmSaleContractRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSaleContractRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleContractRepository for SeaOrmSaleContractRepository {
    async fn create(&self, input: &NewSaleContract) -> RepoResult<SaleContract> {
        let active_model: sale_contract::ActiveModel = input.into();

        let result = sale_contract::Entity::insert(active_model)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<SaleContract>> {
        let result = sale_contract::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self) -> RepoResult<Vec<SaleContract>> {
        let results = sale_contract::Entity::find()
            .order_by_asc(sale_contract::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_property(&self, property_id: Id) -> RepoResult<Option<SaleContract>> {
        let result = sale_contract::Entity::find()
            .filter(sale_contract::Column::PropertyId.eq(property_id))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn update(
        &self,
        id: Id,
        patch: &SaleContractPatch,
    ) -> RepoResult<Option<SaleContract>> {
        let Some(existing) = sale_contract::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let active_model = mapper::sale_contract_patch(id, patch);
        if !active_model.is_changed() {
            return Ok(Some(existing.into()));
        }

        let result = sale_contract::Entity::update(active_model)
            .exec(&*self.db)
            .await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = sale_contract::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Rental Contract Repository =====

pub struct SeaOrmRentalContractRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmRentalContractRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RentalContractRepository for SeaOrmRentalContractRepository {
    async fn create(&self, input: &NewRentalContract) -> RepoResult<RentalContract> {
        let active_model: rental_contract::ActiveModel = input.into();

        let result = rental_contract::Entity::insert(active_model)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: Id) -> RepoResult<Option<RentalContract>> {
        let result = rental_contract::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list(&self) -> RepoResult<Vec<RentalContract>> {
        let results = rental_contract::Entity::find()
            .order_by_asc(rental_contract::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_property(&self, property_id: Id) -> RepoResult<Option<RentalContract>> {
        let result = rental_contract::Entity::find()
            .filter(rental_contract::Column::PropertyId.eq(property_id))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn update(
        &self,
        id: Id,
        patch: &RentalContractPatch,
    ) -> RepoResult<Option<RentalContract>> {
        let Some(existing) = rental_contract::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let active_model = mapper::rental_contract_patch(id, patch);
        if !active_model.is_changed() {
            return Ok(Some(existing.into()));
        }

        let result = rental_contract::Entity::update(active_model)
            .exec(&*self.db)
            .await?;

        Ok(Some(result.into()))
    }

    async fn delete(&self, id: Id) -> RepoResult<bool> {
        let result = rental_contract::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
