//! Referential integrity and uniqueness rules enforced by the schema

mod common;

use brokerage_service::contract::{
    BrokerageError, ClientPatch, OwnerPatch, RentalContractPatch, SaleContractPatch,
};
use brokerage_service::domain::{RentalContractRepository, RepositoryError};
use brokerage_service::infra::storage::repositories::SeaOrmRentalContractRepository;
use common::*;
use std::sync::Arc;

fn assert_duplicate(result: Result<impl std::fmt::Debug, BrokerageError>, expected: &str) {
    match result {
        Err(BrokerageError::Duplicate { resource, .. }) => assert_eq!(resource, expected),
        other => panic!("expected duplicate {expected}, got {other:?}"),
    }
}

fn assert_protected(result: Result<(), BrokerageError>, expected: &str) {
    match result {
        Err(BrokerageError::Protected { resource, .. }) => assert_eq!(resource, expected),
        other => panic!("expected protected {expected}, got {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_owner_national_id_is_rejected() {
    let module = setup().await;
    let service = module.service();

    service.create_owner(new_owner("A")).await.unwrap();
    let mut again = new_owner("B");
    again.national_id = "OWN-A".to_string();

    assert_duplicate(service.create_owner(again).await, "owner");
    assert_eq!(service.list_owners().await.unwrap().len(), 1);
}

#[tokio::test]
async fn updating_owner_onto_taken_national_id_is_rejected() {
    let module = setup().await;
    let service = module.service();

    service.create_owner(new_owner("A")).await.unwrap();
    let second = service.create_owner(new_owner("B")).await.unwrap();

    let patch = OwnerPatch {
        national_id: Some("OWN-A".to_string()),
        ..Default::default()
    };
    assert_duplicate(service.update_owner(second.id, patch).await, "owner");
    assert_eq!(service.get_owner(second.id).await.unwrap().national_id, "OWN-B");
}

#[tokio::test]
async fn duplicate_client_national_id_is_rejected() {
    let module = setup().await;
    let service = module.service();

    service.create_client(new_client("A")).await.unwrap();
    let other = service.create_client(new_client("B")).await.unwrap();

    let patch = ClientPatch {
        national_id: Some("CLI-A".to_string()),
        ..Default::default()
    };
    assert_duplicate(service.update_client(other.id, patch).await, "client");

    let mut again = new_client("C");
    again.national_id = "CLI-B".to_string();
    assert_duplicate(service.create_client(again).await, "client");
}

#[tokio::test]
async fn owner_and_client_may_share_national_id() {
    let module = setup().await;
    let service = module.service();

    let mut owner = new_owner("A");
    owner.national_id = "12345678Z".to_string();
    let mut client = new_client("A");
    client.national_id = "12345678Z".to_string();

    service.create_owner(owner).await.unwrap();
    service.create_client(client).await.unwrap();
}

#[tokio::test]
async fn duplicate_agent_license_is_rejected() {
    let module = setup().await;
    let service = module.service();

    service.create_agent(new_agent("A")).await.unwrap();
    let mut again = new_agent("B");
    again.license_number = "LIC-A".to_string();

    assert_duplicate(service.create_agent(again).await, "agent");
}

#[tokio::test]
async fn property_for_missing_owner_is_invalid_reference() {
    let module = setup().await;
    let service = module.service();

    let err = service.create_property(new_property(999)).await.unwrap_err();
    assert!(
        matches!(err, BrokerageError::InvalidReference { resource: "property", .. }),
        "unexpected error: {err:?}"
    );
    assert!(service.list_properties().await.unwrap().is_empty());
}

#[tokio::test]
async fn visit_for_missing_client_is_invalid_reference() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();

    let err = service
        .create_visit(new_visit(property.id, 42, None))
        .await
        .unwrap_err();
    assert!(matches!(err, BrokerageError::InvalidReference { resource: "visit", .. }));
}

#[tokio::test]
async fn deleting_owner_cascades_properties_and_visits() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let first = service.create_property(new_property(owner.id)).await.unwrap();
    let second = service.create_property(new_property(owner.id)).await.unwrap();
    service
        .create_visit(new_visit(first.id, client.id, None))
        .await
        .unwrap();
    service
        .create_visit(new_visit(second.id, client.id, None))
        .await
        .unwrap();

    service.delete_owner(owner.id).await.unwrap();

    assert!(service.list_properties().await.unwrap().is_empty());
    assert!(service.list_visits().await.unwrap().is_empty());
    // The visiting client is untouched
    assert_eq!(service.get_client(client.id).await.unwrap().id, client.id);
}

#[tokio::test]
async fn deleting_property_with_sale_contract_is_protected() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();
    let visit = service
        .create_visit(new_visit(property.id, client.id, Some(agent.id)))
        .await
        .unwrap();
    let contract = service
        .create_sale_contract(new_sale_contract(property.id, owner.id, client.id, agent.id))
        .await
        .unwrap();

    assert_protected(service.delete_property(property.id).await, "property");

    // Nothing was removed by the rejected delete
    service.get_property(property.id).await.unwrap();
    service.get_visit(visit.id).await.unwrap();
    service.get_sale_contract(contract.id).await.unwrap();

    // Once the contract is gone the property can be removed
    service.delete_sale_contract(contract.id).await.unwrap();
    service.delete_property(property.id).await.unwrap();
    assert!(service.list_visits().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_property_with_rental_contract_is_protected() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();
    service
        .create_rental_contract(new_rental_contract(property.id, owner.id, client.id, agent.id))
        .await
        .unwrap();

    assert_protected(service.delete_property(property.id).await, "property");
    service.get_property(property.id).await.unwrap();
}

#[tokio::test]
async fn deleting_owner_with_contracted_property_is_protected() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();
    service
        .create_sale_contract(new_sale_contract(property.id, owner.id, client.id, agent.id))
        .await
        .unwrap();

    assert_protected(service.delete_owner(owner.id).await, "owner");

    service.get_owner(owner.id).await.unwrap();
    assert_eq!(service.list_owner_properties(owner.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_agent_clears_visit_reference() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();
    let visit = service
        .create_visit(new_visit(property.id, client.id, Some(agent.id)))
        .await
        .unwrap();
    assert_eq!(visit.agent_id, Some(agent.id));

    service.delete_agent(agent.id).await.unwrap();

    let visit = service.get_visit(visit.id).await.unwrap();
    assert_eq!(visit.agent_id, None);
}

#[tokio::test]
async fn deleting_agent_with_contract_is_protected() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();
    service
        .create_rental_contract(new_rental_contract(property.id, owner.id, client.id, agent.id))
        .await
        .unwrap();

    assert_protected(service.delete_agent(agent.id).await, "agent");
    service.get_agent(agent.id).await.unwrap();
}

#[tokio::test]
async fn deleting_client_cascades_visits_unless_contracted() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();
    let browsing = service.create_client(new_client("A")).await.unwrap();
    let buying = service.create_client(new_client("B")).await.unwrap();

    service
        .create_visit(new_visit(property.id, browsing.id, None))
        .await
        .unwrap();
    let kept = service
        .create_visit(new_visit(property.id, buying.id, Some(agent.id)))
        .await
        .unwrap();
    service
        .create_sale_contract(new_sale_contract(property.id, owner.id, buying.id, agent.id))
        .await
        .unwrap();

    service.delete_client(browsing.id).await.unwrap();
    let remaining = service.list_property_visits(property.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    assert_protected(service.delete_client(buying.id).await, "client");
    service.get_visit(kept.id).await.unwrap();
}

#[tokio::test]
async fn second_sale_contract_on_property_is_rejected() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();
    service
        .create_sale_contract(new_sale_contract(property.id, owner.id, client.id, agent.id))
        .await
        .unwrap();

    assert_duplicate(
        service
            .create_sale_contract(new_sale_contract(property.id, owner.id, client.id, agent.id))
            .await,
        "sale_contract",
    );
    assert_eq!(service.list_sale_contracts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn moving_sale_contract_onto_contracted_property_is_rejected() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let first = service.create_property(new_property(owner.id)).await.unwrap();
    let second = service.create_property(new_property(owner.id)).await.unwrap();
    service
        .create_sale_contract(new_sale_contract(first.id, owner.id, client.id, agent.id))
        .await
        .unwrap();
    let other = service
        .create_sale_contract(new_sale_contract(second.id, owner.id, client.id, agent.id))
        .await
        .unwrap();

    let patch = SaleContractPatch {
        property_id: Some(first.id),
        ..Default::default()
    };
    assert_duplicate(
        service.update_sale_contract(other.id, patch).await,
        "sale_contract",
    );
}

#[tokio::test]
async fn property_may_carry_sale_and_rental_contract() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();

    service
        .create_sale_contract(new_sale_contract(property.id, owner.id, client.id, agent.id))
        .await
        .unwrap();
    service
        .create_rental_contract(new_rental_contract(property.id, owner.id, client.id, agent.id))
        .await
        .unwrap();

    assert_duplicate(
        service
            .create_rental_contract(new_rental_contract(
                property.id,
                owner.id,
                client.id,
                agent.id,
            ))
            .await,
        "rental_contract",
    );
}

#[tokio::test]
async fn lease_dates_are_enforced_by_storage() {
    let module = setup().await;
    let service = module.service();

    let owner = service.create_owner(new_owner("A")).await.unwrap();
    let client = service.create_client(new_client("A")).await.unwrap();
    let agent = service.create_agent(new_agent("A")).await.unwrap();
    let property = service.create_property(new_property(owner.id)).await.unwrap();
    let contract = service
        .create_rental_contract(new_rental_contract(property.id, owner.id, client.id, agent.id))
        .await
        .unwrap();

    // A write that skips the service check, as a racing update would
    let repo = SeaOrmRentalContractRepository::new(Arc::new(module.connection().clone()));
    let patch = RentalContractPatch {
        end_date: Some(date(2025, 1, 1)),
        ..Default::default()
    };
    let err = repo.update(contract.id, &patch).await.unwrap_err();
    assert!(matches!(err, RepositoryError::CheckViolation(_)), "{err:?}");

    let stored = service.get_rental_contract(contract.id).await.unwrap();
    assert_eq!(stored.end_date, contract.end_date);
}
