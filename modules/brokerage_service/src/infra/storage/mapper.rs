//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{agent, client, owner, property, rental_contract, sale_contract, visit};
use crate::contract::{
    Agent, AgentPatch, Client, ClientPatch, NewAgent, NewClient, NewOwner, NewProperty,
    NewRentalContract, NewSaleContract, NewVisit, Owner, OwnerPatch, Property, PropertyPatch,
    RentalContract, RentalContractPatch, SaleContract, SaleContractPatch, Visit, VisitPatch,
};
use chrono::NaiveDate;
use sea_orm::ActiveValue::{self, NotSet, Set, Unchanged};

/// `Set` when the patch carries a value, `NotSet` otherwise
fn patched<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}

// ===== Owner Conversions =====

impl From<owner::Model> for Owner {
    fn from(entity: owner::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            national_id: entity.national_id,
            phone: entity.phone,
            email: entity.email,
            address: entity.address,
            registered_on: entity.registered_on,
        }
    }
}

pub(super) fn new_owner(input: &NewOwner, registered_on: NaiveDate) -> owner::ActiveModel {
    owner::ActiveModel {
        id: NotSet,
        name: Set(input.name.clone()),
        surname: Set(input.surname.clone()),
        national_id: Set(input.national_id.clone()),
        phone: Set(input.phone.clone()),
        email: Set(input.email.clone()),
        address: Set(input.address.clone()),
        registered_on: Set(registered_on),
    }
}

/// Registration date is never part of an update
pub(super) fn owner_patch(id: i32, patch: &OwnerPatch) -> owner::ActiveModel {
    owner::ActiveModel {
        id: Unchanged(id),
        name: patched(patch.name.clone()),
        surname: patched(patch.surname.clone()),
        national_id: patched(patch.national_id.clone()),
        phone: patched(patch.phone.clone()),
        email: patched(patch.email.clone()),
        address: patched(patch.address.clone()),
        registered_on: NotSet,
    }
}

// ===== Client Conversions =====

impl From<client::Model> for Client {
    fn from(entity: client::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            national_id: entity.national_id,
            phone: entity.phone,
            email: entity.email,
            property_preferences: entity.property_preferences,
            max_budget: entity.max_budget,
            registered_on: entity.registered_on,
        }
    }
}

pub(super) fn new_client(input: &NewClient, registered_on: NaiveDate) -> client::ActiveModel {
    client::ActiveModel {
        id: NotSet,
        name: Set(input.name.clone()),
        surname: Set(input.surname.clone()),
        national_id: Set(input.national_id.clone()),
        phone: Set(input.phone.clone()),
        email: Set(input.email.clone()),
        property_preferences: Set(input.property_preferences.clone()),
        max_budget: Set(input.max_budget),
        registered_on: Set(registered_on),
    }
}

pub(super) fn client_patch(id: i32, patch: &ClientPatch) -> client::ActiveModel {
    client::ActiveModel {
        id: Unchanged(id),
        name: patched(patch.name.clone()),
        surname: patched(patch.surname.clone()),
        national_id: patched(patch.national_id.clone()),
        phone: patched(patch.phone.clone()),
        email: patched(patch.email.clone()),
        property_preferences: patched(patch.property_preferences.clone()),
        max_budget: patched(patch.max_budget),
        registered_on: NotSet,
    }
}

// ===== Agent Conversions =====

impl From<agent::Model> for Agent {
    fn from(entity: agent::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            phone: entity.phone,
            email: entity.email,
            license_number: entity.license_number,
            hired_on: entity.hired_on,
            salary: entity.salary,
            commission_pct: entity.commission_pct,
        }
    }
}

impl From<&NewAgent> for agent::ActiveModel {
    fn from(input: &NewAgent) -> Self {
        Self {
            id: NotSet,
            name: Set(input.name.clone()),
            surname: Set(input.surname.clone()),
            phone: Set(input.phone.clone()),
            email: Set(input.email.clone()),
            license_number: Set(input.license_number.clone()),
            hired_on: Set(input.hired_on),
            salary: Set(input.salary),
            commission_pct: Set(input.commission_pct),
        }
    }
}

pub(super) fn agent_patch(id: i32, patch: &AgentPatch) -> agent::ActiveModel {
    agent::ActiveModel {
        id: Unchanged(id),
        name: patched(patch.name.clone()),
        surname: patched(patch.surname.clone()),
        phone: patched(patch.phone.clone()),
        email: patched(patch.email.clone()),
        license_number: patched(patch.license_number.clone()),
        hired_on: patched(patch.hired_on),
        salary: patched(patch.salary),
        commission_pct: patched(patch.commission_pct),
    }
}

// ===== Property Conversions =====

impl From<property::Model> for Property {
    fn from(entity: property::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            address: entity.address,
            property_type: entity.property_type,
            rooms: entity.rooms,
            bathrooms: entity.bathrooms,
            surface_m2: entity.surface_m2,
            sale_price: entity.sale_price,
            rental_price: entity.rental_price,
            status: entity.status,
            published_on: entity.published_on,
            description: entity.description,
        }
    }
}

pub(super) fn new_property(input: &NewProperty, published_on: NaiveDate) -> property::ActiveModel {
    property::ActiveModel {
        id: NotSet,
        owner_id: Set(input.owner_id),
        address: Set(input.address.clone()),
        property_type: Set(input.property_type.clone()),
        rooms: Set(input.rooms),
        bathrooms: Set(input.bathrooms),
        surface_m2: Set(input.surface_m2),
        sale_price: Set(input.sale_price),
        rental_price: Set(input.rental_price),
        status: Set(input.status.clone()),
        published_on: Set(published_on),
        description: Set(input.description.clone()),
    }
}

/// Publication date is never part of an update
pub(super) fn property_patch(id: i32, patch: &PropertyPatch) -> property::ActiveModel {
    property::ActiveModel {
        id: Unchanged(id),
        owner_id: patched(patch.owner_id),
        address: patched(patch.address.clone()),
        property_type: patched(patch.property_type.clone()),
        rooms: patched(patch.rooms),
        bathrooms: patched(patch.bathrooms),
        surface_m2: patched(patch.surface_m2),
        sale_price: patched(patch.sale_price),
        rental_price: patched(patch.rental_price),
        status: patched(patch.status.clone()),
        published_on: NotSet,
        description: patched(patch.description.clone()),
    }
}

// ===== Visit Conversions =====

impl From<visit::Model> for Visit {
    fn from(entity: visit::Model) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            client_id: entity.client_id,
            agent_id: entity.agent_id,
            visit_date: entity.visit_date,
            visit_time: entity.visit_time,
            client_comments: entity.client_comments,
            rating: entity.rating,
        }
    }
}

impl From<&NewVisit> for visit::ActiveModel {
    fn from(input: &NewVisit) -> Self {
        Self {
            id: NotSet,
            property_id: Set(input.property_id),
            client_id: Set(input.client_id),
            agent_id: Set(input.agent_id),
            visit_date: Set(input.visit_date),
            visit_time: Set(input.visit_time),
            client_comments: Set(input.client_comments.clone()),
            rating: Set(input.rating),
        }
    }
}

pub(super) fn visit_patch(id: i32, patch: &VisitPatch) -> visit::ActiveModel {
    visit::ActiveModel {
        id: Unchanged(id),
        property_id: patched(patch.property_id),
        client_id: patched(patch.client_id),
        agent_id: patched(patch.agent_id),
        visit_date: patched(patch.visit_date),
        visit_time: patched(patch.visit_time),
        client_comments: patched(patch.client_comments.clone()),
        rating: patched(patch.rating),
    }
}

// ===== Sale Contract Conversions =====

impl From<sale_contract::Model> for SaleContract {
    fn from(entity: sale_contract::Model) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            owner_id: entity.owner_id,
            client_id: entity.client_id,
            agent_id: entity.agent_id,
            contract_date: entity.contract_date,
            final_price: entity.final_price,
            closing_date: entity.closing_date,
            status: entity.status,
            agent_commission: entity.agent_commission,
        }
    }
}

impl From<&NewSaleContract> for sale_contract::ActiveModel {
    fn from(input: &NewSaleContract) -> Self {
        Self {
            id: NotSet,
            property_id: Set(input.property_id),
            owner_id: Set(input.owner_id),
            client_id: Set(input.client_id),
            agent_id: Set(input.agent_id),
            contract_date: Set(input.contract_date),
            final_price: Set(input.final_price),
            closing_date: Set(input.closing_date),
            status: Set(input.status.clone()),
            agent_commission: Set(input.agent_commission),
        }
    }
}

pub(super) fn sale_contract_patch(id: i32, patch: &SaleContractPatch) -> sale_contract::ActiveModel {
    sale_contract::ActiveModel {
        id: Unchanged(id),
        property_id: patched(patch.property_id),
        owner_id: patched(patch.owner_id),
        client_id: patched(patch.client_id),
        agent_id: patched(patch.agent_id),
        contract_date: patched(patch.contract_date),
        final_price: patched(patch.final_price),
        closing_date: patched(patch.closing_date),
        status: patched(patch.status.clone()),
        agent_commission: patched(patch.agent_commission),
    }
}

// ===== Rental Contract Conversions =====

impl From<rental_contract::Model> for RentalContract {
    fn from(entity: rental_contract::Model) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            owner_id: entity.owner_id,
            client_id: entity.client_id,
            agent_id: entity.agent_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            monthly_rent: entity.monthly_rent,
            status: entity.status,
            security_deposit: entity.security_deposit,
        }
    }
}

impl From<&NewRentalContract> for rental_contract::ActiveModel {
    fn from(input: &NewRentalContract) -> Self {
        Self {
            id: NotSet,
            property_id: Set(input.property_id),
            owner_id: Set(input.owner_id),
            client_id: Set(input.client_id),
            agent_id: Set(input.agent_id),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            monthly_rent: Set(input.monthly_rent),
            status: Set(input.status.clone()),
            security_deposit: Set(input.security_deposit),
        }
    }
}

pub(super) fn rental_contract_patch(
    id: i32,
    patch: &RentalContractPatch,
) -> rental_contract::ActiveModel {
    rental_contract::ActiveModel {
        id: Unchanged(id),
        property_id: patched(patch.property_id),
        owner_id: patched(patch.owner_id),
        client_id: patched(patch.client_id),
        agent_id: patched(patch.agent_id),
        start_date: patched(patch.start_date),
        end_date: patched(patch.end_date),
        monthly_rent: patched(patch.monthly_rent),
        status: patched(patch.status.clone()),
        security_deposit: patched(patch.security_deposit),
    }
}
