//! Product and location catalogue tests
//!
//! Covers the add / edit / delete contract shared by both record kinds:
//! - Validation of required fields after trimming
//! - Conflict on duplicate identifiers, leaving the store unchanged
//! - NotFound on unknown identifiers

mod common;

use common::{location_input, product_input, test_pool};
use inventory_server::error::AppError;
use inventory_server::services::{LocationService, ProductService, RenameInput};
use proptest::prelude::*;
use shared::{Location, Product};

fn rename(name: &str) -> RenameInput {
    RenameInput {
        name: name.to_string(),
    }
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_add_product_then_list() {
    let service = ProductService::new(test_pool().await);

    let created = service
        .create_product(product_input("P1", "Widget"))
        .await
        .unwrap();
    assert_eq!(created, Product::new("P1", "Widget"));

    let products = service.list_products().await.unwrap();
    assert_eq!(products, vec![Product::new("P1", "Widget")]);
}

#[tokio::test]
async fn test_add_product_trims_fields() {
    let service = ProductService::new(test_pool().await);

    let created = service
        .create_product(product_input("  P1 ", "  Widget\t"))
        .await
        .unwrap();
    assert_eq!(created, Product::new("P1", "Widget"));
    assert_eq!(service.get_product("P1").await.unwrap().name, "Widget");
}

#[tokio::test]
async fn test_add_product_requires_both_fields() {
    let service = ProductService::new(test_pool().await);

    let err = service
        .create_product(product_input("   ", "Widget"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "product_id"));

    let err = service
        .create_product(product_input("P1", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "name"));

    assert!(service.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_product_is_conflict() {
    let service = ProductService::new(test_pool().await);
    service
        .create_product(product_input("P1", "Widget"))
        .await
        .unwrap();

    let err = service
        .create_product(product_input("P1", "Gadget"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Original record untouched
    assert_eq!(
        service.list_products().await.unwrap(),
        vec![Product::new("P1", "Widget")]
    );
}

#[tokio::test]
async fn test_products_listed_by_name() {
    let service = ProductService::new(test_pool().await);
    for (id, name) in [("P1", "Widget"), ("P2", "Anvil"), ("P3", "Gadget")] {
        service.create_product(product_input(id, name)).await.unwrap();
    }

    let names: Vec<String> = service
        .list_products()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Anvil", "Gadget", "Widget"]);
}

#[tokio::test]
async fn test_edit_product_name() {
    let service = ProductService::new(test_pool().await);
    service
        .create_product(product_input("P1", "Widget"))
        .await
        .unwrap();

    let updated = service
        .update_product("P1", rename(" Sprocket "))
        .await
        .unwrap();
    assert_eq!(updated, Product::new("P1", "Sprocket"));
    assert_eq!(service.get_product("P1").await.unwrap().name, "Sprocket");
}

#[tokio::test]
async fn test_edit_unknown_product_is_not_found() {
    let service = ProductService::new(test_pool().await);
    service
        .create_product(product_input("P1", "Widget"))
        .await
        .unwrap();

    let err = service
        .update_product("P2", rename("Gadget"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Blank names do not mask the missing record
    let err = service.update_product("P2", rename("")).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert_eq!(
        service.list_products().await.unwrap(),
        vec![Product::new("P1", "Widget")]
    );
}

#[tokio::test]
async fn test_edit_product_rejects_blank_name() {
    let service = ProductService::new(test_pool().await);
    service
        .create_product(product_input("P1", "Widget"))
        .await
        .unwrap();

    let err = service.update_product("P1", rename("  ")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    assert_eq!(service.get_product("P1").await.unwrap().name, "Widget");
}

#[tokio::test]
async fn test_delete_product_twice() {
    let service = ProductService::new(test_pool().await);
    service
        .create_product(product_input("P1", "Widget"))
        .await
        .unwrap();

    service.delete_product("P1").await.unwrap();
    let err = service.delete_product("P1").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = service.get_product("P1").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_deleted_product_id_can_be_reused() {
    let service = ProductService::new(test_pool().await);
    service
        .create_product(product_input("P1", "Widget"))
        .await
        .unwrap();
    service.delete_product("P1").await.unwrap();

    let created = service
        .create_product(product_input("P1", "Gadget"))
        .await
        .unwrap();
    assert_eq!(created.name, "Gadget");
}

// ============================================================================
// Locations
// ============================================================================

#[tokio::test]
async fn test_location_lifecycle() {
    let service = LocationService::new(test_pool().await);

    service
        .create_location(location_input("L1", "Warehouse"))
        .await
        .unwrap();
    service
        .create_location(location_input("L2", "Store"))
        .await
        .unwrap();
    assert_eq!(
        service.list_locations().await.unwrap(),
        vec![Location::new("L2", "Store"), Location::new("L1", "Warehouse")]
    );

    let updated = service
        .update_location("L1", rename("Back Room"))
        .await
        .unwrap();
    assert_eq!(updated, Location::new("L1", "Back Room"));

    service.delete_location("L2").await.unwrap();
    assert_eq!(
        service.list_locations().await.unwrap(),
        vec![Location::new("L1", "Back Room")]
    );
}

#[tokio::test]
async fn test_location_error_taxonomy() {
    let service = LocationService::new(test_pool().await);
    service
        .create_location(location_input("L1", "Warehouse"))
        .await
        .unwrap();

    let err = service
        .create_location(location_input("", "Yard"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let err = service
        .create_location(location_input("L1", "Yard"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let err = service
        .update_location("L9", rename("Yard"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = service.delete_location("L9").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert_eq!(
        service.list_locations().await.unwrap(),
        vec![Location::new("L1", "Warehouse")]
    );
}

#[tokio::test]
async fn test_same_identifier_in_both_catalogues() {
    let pool = test_pool().await;
    let products = ProductService::new(pool.clone());
    let locations = LocationService::new(pool);

    // Uniqueness is per record kind
    products
        .create_product(product_input("X1", "Widget"))
        .await
        .unwrap();
    locations
        .create_location(location_input("X1", "Warehouse"))
        .await
        .unwrap();
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn id_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,12}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,20}[A-Za-z0-9]"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Add followed by List includes the record exactly once
    #[test]
    fn prop_added_product_listed_once(id in id_strategy(), name in name_strategy()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let products = runtime.block_on(async {
            let service = ProductService::new(test_pool().await);
            service.create_product(product_input(&id, &name)).await.unwrap();
            service.list_products().await.unwrap()
        });

        let matching = products
            .iter()
            .filter(|p| p.product_id == id && p.name == name)
            .count();
        prop_assert_eq!(matching, 1);
    }

    /// A second Add with the same identifier always conflicts
    #[test]
    fn prop_duplicate_location_conflicts(
        id in id_strategy(),
        first in name_strategy(),
        second in name_strategy()
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (result, locations) = runtime.block_on(async {
            let service = LocationService::new(test_pool().await);
            service.create_location(location_input(&id, &first)).await.unwrap();
            let result = service.create_location(location_input(&id, &second)).await;
            (result, service.list_locations().await.unwrap())
        });

        prop_assert!(matches!(result, Err(AppError::Conflict(_))));
        prop_assert_eq!(locations, vec![Location::new(id, first)]);
    }
}
