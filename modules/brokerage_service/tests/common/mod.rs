//! Common test utilities: an in-memory brokerage database and input fixtures

#![allow(dead_code)]

use brokerage_service::contract::{
    NewAgent, NewClient, NewOwner, NewProperty, NewRentalContract, NewSaleContract, NewVisit,
};
use brokerage_service::{BrokerageModule, Config};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal_macros::dec;

/// Fresh in-memory SQLite database with the schema migrated
pub async fn setup() -> BrokerageModule {
    BrokerageModule::init(&Config::default())
        .await
        .expect("in-memory brokerage database")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub fn new_owner(tag: &str) -> NewOwner {
    NewOwner {
        name: "Lucia".to_string(),
        surname: format!("Fernandez {tag}"),
        national_id: format!("OWN-{tag}"),
        phone: "+34 600 111 222".to_string(),
        email: format!("lucia.{}@example.com", tag.to_lowercase()),
        address: "Calle Mayor 12, Madrid".to_string(),
    }
}

pub fn new_client(tag: &str) -> NewClient {
    NewClient {
        name: "Marco".to_string(),
        surname: format!("Rossi {tag}"),
        national_id: format!("CLI-{tag}"),
        phone: "+34 600 333 444".to_string(),
        email: format!("marco.{}@example.com", tag.to_lowercase()),
        property_preferences: Some("Two bedrooms, near the metro".to_string()),
        max_budget: dec!(250000.50),
    }
}

pub fn new_agent(tag: &str) -> NewAgent {
    NewAgent {
        name: "Sofia".to_string(),
        surname: format!("Garcia {tag}"),
        phone: "+34 600 555 666".to_string(),
        email: format!("sofia.{}@brokerage.example", tag.to_lowercase()),
        license_number: format!("LIC-{tag}"),
        hired_on: date(2021, 9, 1),
        salary: dec!(2500.00),
        commission_pct: dec!(3.50),
    }
}

pub fn new_property(owner_id: i32) -> NewProperty {
    NewProperty {
        owner_id,
        address: "Avenida del Puerto 7, Valencia".to_string(),
        property_type: "apartment".to_string(),
        rooms: 3,
        bathrooms: 2,
        surface_m2: dec!(85.25),
        sale_price: Some(dec!(210000.00)),
        rental_price: Some(dec!(950.00)),
        status: "available".to_string(),
        published_on: None,
        description: None,
    }
}

pub fn new_visit(property_id: i32, client_id: i32, agent_id: Option<i32>) -> NewVisit {
    NewVisit {
        property_id,
        client_id,
        agent_id,
        visit_date: date(2025, 4, 10),
        visit_time: time(17, 30),
        client_comments: None,
        rating: None,
    }
}

pub fn new_sale_contract(
    property_id: i32,
    owner_id: i32,
    client_id: i32,
    agent_id: i32,
) -> NewSaleContract {
    NewSaleContract {
        property_id,
        owner_id,
        client_id,
        agent_id,
        contract_date: date(2025, 5, 2),
        final_price: dec!(205000.00),
        closing_date: None,
        status: "signed".to_string(),
        agent_commission: dec!(7175.00),
    }
}

pub fn new_rental_contract(
    property_id: i32,
    owner_id: i32,
    client_id: i32,
    agent_id: i32,
) -> NewRentalContract {
    NewRentalContract {
        property_id,
        owner_id,
        client_id,
        agent_id,
        start_date: date(2025, 6, 1),
        end_date: date(2026, 5, 31),
        monthly_rent: dec!(950.00),
        status: "active".to_string(),
        security_deposit: dec!(1900.00),
    }
}
