use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use ecommerce_api::{models::{Order, User}, schema::users};
use serde_json::Value;

use crate::helpers::TestApp;

#[actix_web::test]
async fn post_user_creates_user(){
    let app = TestApp::spawn_app().await;

    let response = app.post_user(serde_json::json!({
        "name": "Ann",
        "email": "a@x.com",
        "address": "1 Rd"
    })).await;

    assert_eq!(response.status().as_u16(), 201);

    let user: User = response.json().await.unwrap();
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.address, "1 Rd");

    let mut conn = app.pool.get().unwrap();
    let count: i64 = users::table
        .filter(users::email.eq("a@x.com"))
        .count()
        .get_result(&mut conn)
        .unwrap();

    assert_eq!(count, 1);
}

#[actix_web::test]
async fn created_user_is_retrievable_by_id(){
    let app = TestApp::spawn_app().await;
    let user = app.create_user("Ann", "a@x.com").await;

    let response = app.get(&format!("/users/{}", user.id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let fetched: User = response.json().await.unwrap();
    assert_eq!(fetched, user);
}

#[actix_web::test]
async fn post_user_with_duplicate_email_is_a_conflict(){
    let app = TestApp::spawn_app().await;
    app.create_user("Ann", "a@x.com").await;

    let response = app.post_user(serde_json::json!({
        "name": "Another Ann",
        "email": "a@x.com",
        "address": "2 Rd"
    })).await;

    assert_eq!(response.status().as_u16(), 409);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Email already registered");

    let users: Vec<User> = app.get("/users").await.json().await.unwrap();
    assert_eq!(users.len(), 1);
}

#[actix_web::test]
async fn post_user_with_invalid_data_returns_400(){
    let app = TestApp::spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({"email": "a@x.com", "address": "1 Rd"}), "missing name"),
        (serde_json::json!({"name": "Ann", "address": "1 Rd"}), "missing email"),
        (serde_json::json!({"name": "Ann", "email": "a@x.com"}), "missing address"),
        (serde_json::json!({"name": "", "email": "a@x.com", "address": "1 Rd"}), "empty name"),
        (serde_json::json!({"name": "Ann", "email": "not-an-email", "address": "1 Rd"}), "invalid email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_user(body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 when the payload was {}",
            description
        );
    }

    let users: Vec<User> = app.get("/users").await.json().await.unwrap();
    assert!(users.is_empty());
}

#[actix_web::test]
async fn validation_errors_name_the_failing_field(){
    let app = TestApp::spawn_app().await;

    let response = app.post_user(serde_json::json!({
        "name": "Ann",
        "email": "not-an-email",
        "address": "1 Rd"
    })).await;

    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body.get("email").is_some());
}

#[actix_web::test]
async fn get_users_lists_in_insertion_order(){
    let app = TestApp::spawn_app().await;
    let ann = app.create_user("Ann", "a@x.com").await;
    let bob = app.create_user("Bob", "b@x.com").await;

    let response = app.get("/users").await;
    assert_eq!(response.status().as_u16(), 200);

    let users: Vec<User> = response.json().await.unwrap();
    assert_eq!(users, vec![ann, bob]);
}

#[actix_web::test]
async fn get_unknown_user_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/users/42").await;
    assert_eq!(response.status().as_u16(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn non_numeric_user_id_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/users/abc").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn put_user_replaces_every_field(){
    let app = TestApp::spawn_app().await;
    let user = app.create_user("Ann", "a@x.com").await;

    let response = app.put(&format!("/users/{}", user.id), Some(serde_json::json!({
        "name": "Annie",
        "email": "annie@x.com",
        "address": "9 Ave"
    }))).await;

    assert_eq!(response.status().as_u16(), 200);

    let updated: User = response.json().await.unwrap();
    assert_eq!(updated, User{
        id: user.id,
        name: "Annie".to_string(),
        email: "annie@x.com".to_string(),
        address: "9 Ave".to_string()
    });

    let fetched: User = app.get(&format!("/users/{}", user.id)).await.json().await.unwrap();
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn put_user_keeps_the_users_orders(){
    let app = TestApp::spawn_app().await;
    let user = app.create_user("Ann", "a@x.com").await;
    let order = app.create_order(user.id).await;

    let response = app.put(&format!("/users/{}", user.id), Some(serde_json::json!({
        "name": "Annie",
        "email": "annie@x.com",
        "address": "9 Ave"
    }))).await;
    assert_eq!(response.status().as_u16(), 200);

    let orders: Vec<Order> = app.get(&format!("/users/{}/orders", user.id)).await.json().await.unwrap();
    assert_eq!(orders, vec![order]);
}

#[actix_web::test]
async fn put_unknown_user_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.put("/users/7", Some(serde_json::json!({
        "name": "Annie",
        "email": "annie@x.com",
        "address": "9 Ave"
    }))).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn put_user_with_invalid_data_returns_400(){
    let app = TestApp::spawn_app().await;
    let user = app.create_user("Ann", "a@x.com").await;

    let test_cases = vec![
        (serde_json::json!({"email": "annie@x.com", "address": "9 Ave"}), "missing name"),
        (serde_json::json!({"name": "Annie", "address": "9 Ave"}), "missing email"),
        (serde_json::json!({"name": "Annie", "email": "annie@x.com"}), "missing address"),
        (serde_json::json!({"name": "   ", "email": "annie@x.com", "address": "9 Ave"}), "blank name"),
        (serde_json::json!({"name": "Annie", "email": "not-an-email", "address": "9 Ave"}), "invalid email"),
    ];

    for (body, description) in test_cases {
        let response = app.put(&format!("/users/{}", user.id), Some(body)).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 when the payload was {}",
            description
        );
    }

    let fetched: User = app.get(&format!("/users/{}", user.id)).await.json().await.unwrap();
    assert_eq!(fetched, user);
}

#[actix_web::test]
async fn put_user_with_taken_email_is_a_conflict(){
    let app = TestApp::spawn_app().await;
    app.create_user("Ann", "a@x.com").await;
    let bob = app.create_user("Bob", "b@x.com").await;

    let response = app.put(&format!("/users/{}", bob.id), Some(serde_json::json!({
        "name": "Bob",
        "email": "a@x.com",
        "address": "2 Rd"
    }))).await;

    assert_eq!(response.status().as_u16(), 409);

    let fetched: User = app.get(&format!("/users/{}", bob.id)).await.json().await.unwrap();
    assert_eq!(fetched.email, "b@x.com");
}

#[actix_web::test]
async fn delete_user_returns_message(){
    let app = TestApp::spawn_app().await;
    let user = app.create_user("Ann", "a@x.com").await;

    let response = app.delete(&format!("/users/{}", user.id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User deleted");

    let response = app.get(&format!("/users/{}", user.id)).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn delete_unknown_user_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.delete("/users/3").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn orders_for_user_lists_only_that_users_orders(){
    let app = TestApp::spawn_app().await;
    let ann = app.create_user("Ann", "a@x.com").await;
    let bob = app.create_user("Bob", "b@x.com").await;

    let first = app.create_order(ann.id).await;
    app.create_order(bob.id).await;
    let second = app.create_order(ann.id).await;

    let response = app.get(&format!("/users/{}/orders", ann.id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let orders: Vec<Order> = response.json().await.unwrap();
    assert_eq!(orders, vec![first, second]);
}

#[actix_web::test]
async fn orders_for_user_without_orders_is_empty(){
    let app = TestApp::spawn_app().await;
    let user = app.create_user("Ann", "a@x.com").await;

    let response = app.get(&format!("/users/{}/orders", user.id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let orders: Vec<Order> = response.json().await.unwrap();
    assert!(orders.is_empty());
}

#[actix_web::test]
async fn orders_for_unknown_user_returns_404(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/users/99/orders").await;
    assert_eq!(response.status().as_u16(), 404);
}
