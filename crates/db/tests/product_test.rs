//! Integration tests for Product repository.

use std::sync::Arc;

use coupons_core::EnterpriseResolver;
use coupons_core::catalog::{ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE, ProductCatalog};
use coupons_db::{
    ProductRepository, connect_with_pool,
    entities::{product_attribute_values, product_attributes, products},
    migration::{Migrator, MigratorTrait},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Fresh in-memory database with the catalogue schema.
async fn setup_db() -> DatabaseConnection {
    let db = connect_with_pool("sqlite::memory:", 1, 1)
        .await
        .expect("Failed to open sqlite database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

async fn create_attribute(db: &DatabaseConnection, code: &str) -> i32 {
    product_attributes::ActiveModel {
        code: Set(code.to_string()),
        name: Set(code.replace('_', " ")),
        attribute_type: Set("text".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create attribute")
    .id
}

async fn create_product(db: &DatabaseConnection, title: &str) -> i32 {
    products::ActiveModel {
        structure: Set("standalone".to_string()),
        upc: Set(None),
        title: Set(title.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create product")
    .id
}

async fn set_attribute(db: &DatabaseConnection, product_id: i32, attribute_id: i32, value: &str) {
    product_attribute_values::ActiveModel {
        product_id: Set(product_id),
        attribute_id: Set(attribute_id),
        value_text: Set(Some(value.to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to set attribute value");
}

#[tokio::test]
async fn test_find_coupon_product_with_enterprise() {
    let db = setup_db().await;
    let attribute = create_attribute(&db, ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE).await;
    let product_id = create_product(&db, "Enterprise coupon").await;
    set_attribute(&db, product_id, attribute, "E-123").await;

    let repo = ProductRepository::new(db);
    let product = repo
        .find_coupon_product(product_id)
        .await
        .expect("query succeeds")
        .expect("product exists");

    assert_eq!(product.id, product_id);
    assert_eq!(product.title, "Enterprise coupon");
    assert_eq!(product.enterprise_customer_uuid.as_deref(), Some("E-123"));
}

#[tokio::test]
async fn test_find_coupon_product_missing() {
    let db = setup_db().await;
    let repo = ProductRepository::new(db);

    let product = repo.find_coupon_product(9999).await.expect("query succeeds");
    assert!(product.is_none());
}

#[tokio::test]
async fn test_other_attributes_are_ignored() {
    let db = setup_db().await;
    let enterprise = create_attribute(&db, ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE).await;
    let note = create_attribute(&db, "note").await;
    let first = create_product(&db, "Coupon A").await;
    let second = create_product(&db, "Coupon B").await;
    set_attribute(&db, first, note, "not an enterprise").await;
    set_attribute(&db, second, enterprise, "E-456").await;

    let repo = ProductRepository::new(db);

    let a = repo
        .find_coupon_product(first)
        .await
        .expect("query succeeds")
        .expect("product exists");
    assert_eq!(a.enterprise_customer_uuid, None);

    assert_eq!(
        repo.attribute_text(second, ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE)
            .await
            .expect("query succeeds")
            .as_deref(),
        Some("E-456")
    );
}

#[tokio::test]
async fn test_resolver_over_database() {
    let db = setup_db().await;
    let attribute = create_attribute(&db, ENTERPRISE_CUSTOMER_UUID_ATTRIBUTE).await;
    let product_id = create_product(&db, "Enterprise coupon").await;
    set_attribute(&db, product_id, attribute, "E-123").await;

    let resolver = EnterpriseResolver::new(Arc::new(ProductRepository::new(db)));

    assert_eq!(
        resolver
            .get_enterprise_from_product(product_id)
            .await
            .expect("lookup succeeds")
            .as_deref(),
        Some("E-123")
    );
    assert_eq!(
        resolver
            .get_enterprise_from_product(product_id + 1000)
            .await
            .expect("missing product is not an error"),
        None
    );
}
