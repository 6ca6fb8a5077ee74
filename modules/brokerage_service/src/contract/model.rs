//! Contract models for the brokerage service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;
use validator::{Validate, ValidationError};

/// Opaque, storage-assigned row identifier
pub type Id = i32;

// ===== Owner =====

/// Property owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: Id,
    pub name: String,
    pub surname: String,
    /// National identity document, unique among owners
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Stamped on creation, never updated
    pub registered_on: NaiveDate,
}

/// Owner creation input
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewOwner {
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub name: String,
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub surname: String,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub national_id: String,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub phone: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1, max = 255), custom = "not_blank")]
    pub address: String,
}

/// Partial owner update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct OwnerPatch {
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub surname: Option<String>,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub national_id: Option<String>,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub phone: Option<String>,
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 255), custom = "not_blank")]
    pub address: Option<String>,
}

// ===== Client =====

/// Prospective buyer or tenant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: Id,
    pub name: String,
    pub surname: String,
    /// National identity document, unique among clients
    pub national_id: String,
    pub phone: String,
    pub email: String,
    /// Free-text description of what the client is looking for
    pub property_preferences: Option<String>,
    pub max_budget: Decimal,
    /// Stamped on creation, never updated
    pub registered_on: NaiveDate,
}

/// Client creation input
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewClient {
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub name: String,
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub surname: String,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub national_id: String,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub phone: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    pub property_preferences: Option<String>,
    pub max_budget: Decimal,
}

/// Partial client update; `Some(None)` clears a nullable column
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ClientPatch {
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub surname: Option<String>,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub national_id: Option<String>,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub phone: Option<String>,
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
    pub property_preferences: Option<Option<String>>,
    pub max_budget: Option<Decimal>,
}

// ===== Agent =====

/// Licensed brokerage agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id: Id,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    /// Agent license number, globally unique
    pub license_number: String,
    pub hired_on: NaiveDate,
    pub salary: Decimal,
    pub commission_pct: Decimal,
}

/// Agent creation input
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewAgent {
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub name: String,
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub surname: String,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub phone: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub license_number: String,
    pub hired_on: NaiveDate,
    pub salary: Decimal,
    pub commission_pct: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct AgentPatch {
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100), custom = "not_blank")]
    pub surname: Option<String>,
    #[validate(length(min = 1, max = 20), custom = "not_blank")]
    pub phone: Option<String>,
    #[validate(email, length(max = 100))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub license_number: Option<String>,
    pub hired_on: Option<NaiveDate>,
    pub salary: Option<Decimal>,
    pub commission_pct: Option<Decimal>,
}

// ===== Property =====

/// Listed property, owned by exactly one owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: Id,
    pub owner_id: Id,
    pub address: String,
    /// Free-form kind, e.g. "apartment" or "house"
    pub property_type: String,
    pub rooms: i32,
    pub bathrooms: i32,
    pub surface_m2: Decimal,
    pub sale_price: Option<Decimal>,
    pub rental_price: Option<Decimal>,
    pub status: String,
    pub published_on: NaiveDate,
    pub description: Option<String>,
}

/// Property creation input
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewProperty {
    pub owner_id: Id,
    #[validate(length(min = 1, max = 255), custom = "not_blank")]
    pub address: String,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub property_type: String,
    #[validate(range(min = 0))]
    pub rooms: i32,
    #[validate(range(min = 0))]
    pub bathrooms: i32,
    pub surface_m2: Decimal,
    pub sale_price: Option<Decimal>,
    pub rental_price: Option<Decimal>,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub status: String,
    /// Defaults to the creation day
    pub published_on: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PropertyPatch {
    pub owner_id: Option<Id>,
    #[validate(length(min = 1, max = 255), custom = "not_blank")]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub property_type: Option<String>,
    #[validate(range(min = 0))]
    pub rooms: Option<i32>,
    #[validate(range(min = 0))]
    pub bathrooms: Option<i32>,
    pub surface_m2: Option<Decimal>,
    pub sale_price: Option<Option<Decimal>>,
    pub rental_price: Option<Option<Decimal>>,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub status: Option<String>,
    pub description: Option<Option<String>>,
}

// ===== Visit =====

/// Client visit to a property, optionally accompanied by an agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: Id,
    pub property_id: Id,
    pub client_id: Id,
    /// Cleared when the agent is deleted
    pub agent_id: Option<Id>,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub client_comments: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub property_id: Id,
    pub client_id: Id,
    pub agent_id: Option<Id>,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub client_comments: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitPatch {
    pub property_id: Option<Id>,
    pub client_id: Option<Id>,
    pub agent_id: Option<Option<Id>>,
    pub visit_date: Option<NaiveDate>,
    pub visit_time: Option<NaiveTime>,
    pub client_comments: Option<Option<String>>,
    pub rating: Option<Option<i32>>,
}

// ===== Sale contract =====

/// Sale of a property; at most one per property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleContract {
    pub id: Id,
    pub property_id: Id,
    pub owner_id: Id,
    pub client_id: Id,
    pub agent_id: Id,
    pub contract_date: NaiveDate,
    pub final_price: Decimal,
    pub closing_date: Option<NaiveDate>,
    pub status: String,
    pub agent_commission: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewSaleContract {
    pub property_id: Id,
    pub owner_id: Id,
    pub client_id: Id,
    pub agent_id: Id,
    pub contract_date: NaiveDate,
    pub final_price: Decimal,
    pub closing_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub status: String,
    pub agent_commission: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SaleContractPatch {
    pub property_id: Option<Id>,
    pub owner_id: Option<Id>,
    pub client_id: Option<Id>,
    pub agent_id: Option<Id>,
    pub contract_date: Option<NaiveDate>,
    pub final_price: Option<Decimal>,
    pub closing_date: Option<Option<NaiveDate>>,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub status: Option<String>,
    pub agent_commission: Option<Decimal>,
}

// ===== Rental contract =====

/// Rental of a property; at most one per property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalContract {
    pub id: Id,
    pub property_id: Id,
    pub owner_id: Id,
    pub client_id: Id,
    pub agent_id: Id,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: Decimal,
    pub status: String,
    pub security_deposit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewRentalContract {
    pub property_id: Id,
    pub owner_id: Id,
    pub client_id: Id,
    pub agent_id: Id,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: Decimal,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub status: String,
    pub security_deposit: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct RentalContractPatch {
    pub property_id: Option<Id>,
    pub owner_id: Option<Id>,
    pub client_id: Option<Id>,
    pub agent_id: Option<Id>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_rent: Option<Decimal>,
    #[validate(length(min = 1, max = 50), custom = "not_blank")]
    pub status: Option<String>,
    pub security_deposit: Option<Decimal>,
}

/// Rejects text made only of whitespace
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ===== Display labels =====

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.property_type, self.address)
    }
}

impl Visit {
    /// Label built from the visited property and the visiting client
    pub fn label(&self, property: &Property, client: &Client) -> String {
        format!("Visit to {} by {}", property, client)
    }
}

impl SaleContract {
    pub fn label(&self, property: &Property) -> String {
        format!("Sale - {}", property.address)
    }
}

impl RentalContract {
    pub fn label(&self, property: &Property) -> String {
        format!("Rental - {}", property.address)
    }
}
