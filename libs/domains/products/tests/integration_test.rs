//! Integration tests for the Products domain against a real MongoDB
//!
//! These spin up a MongoDB testcontainer. Run them with
//! `cargo test -- --ignored` on a machine with Docker available.

use domain_products::{CreateProduct, MongoProductRepository, ProductError, ProductService, UpdateProduct};
use test_utils::TestMongo;
use uuid::Uuid;

fn create_input(name: &str, price: f64, image: &str) -> CreateProduct {
    CreateProduct {
        name: Some(name.to_string()),
        price: Some(price),
        image: Some(image.to_string()),
    }
}

async fn mongo_service(mongo: &TestMongo) -> ProductService<MongoProductRepository> {
    let client = database::mongodb::connect(mongo.url())
        .await
        .expect("Failed to connect to test MongoDB");
    let db = client.database("products_test");
    ProductService::new(MongoProductRepository::new(db))
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_crud_roundtrip_against_mongodb() {
    let mongo = TestMongo::new().await;
    let service = mongo_service(&mongo).await;

    // Create
    let created = service
        .create_product(create_input("Pen", 2.0, "pen.png"))
        .await
        .unwrap();

    // Read back by id; values survive the BSON roundtrip
    let fetched = service.get_product(&created.id.to_string()).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Pen");
    assert_eq!(fetched.price, 2.0);
    assert_eq!(fetched.image, "pen.png");

    // Partial update replaces only the named field
    let updated = service
        .update_product(
            created.id,
            UpdateProduct {
                price: Some(3.0),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("record should exist");
    assert_eq!(updated.price, 3.0);
    assert_eq!(updated.name, "Pen");
    assert!(updated.updated_at >= created.updated_at);

    // Delete, then the record is gone
    service.delete_product(created.id).await.unwrap();
    let result = service.get_product(&created.id.to_string()).await;
    assert!(matches!(result, Err(ProductError::NotFound)));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_returns_all_records() {
    let mongo = TestMongo::new().await;
    let service = mongo_service(&mongo).await;

    service
        .create_product(create_input("Pen", 2.0, "pen.png"))
        .await
        .unwrap();
    service
        .create_product(create_input("Pencil", 1.0, "pencil.png"))
        .await
        .unwrap();

    let products = service.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_missing_record_yields_none() {
    let mongo = TestMongo::new().await;
    let service = mongo_service(&mongo).await;

    let result = service
        .update_product(Uuid::now_v7(), UpdateProduct::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_missing_record_is_silent() {
    // MongoDB's delete-by-id does not signal absence as an error
    let mongo = TestMongo::new().await;
    let service = mongo_service(&mongo).await;

    assert!(service.delete_product(Uuid::now_v7()).await.is_ok());
}
