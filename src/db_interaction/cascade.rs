//! Deletion rules.
//!
//! A user owns its orders, so deleting a user removes every one of its orders
//! together with their membership rows. Orders and products only share the
//! `order_product` relation: deleting either side removes the membership rows
//! that reference it and never touches the other side.
//!
//! The foreign keys carry `ON DELETE CASCADE`, so each function issues a single
//! `DELETE` of the root row and the store removes the dependants in the same
//! statement. A child inserted concurrently either lands before the root row
//! lock and is removed with it, or waits and then fails its own foreign key.
//! Errors here are never read as a missing referenced row: zero affected rows
//! is the only [`StoreError::NotFound`].

use diesel::{QueryDsl, RunQueryDsl};

use crate::{schema::{orders, products, users}, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::{Entity, StoreError};

fn deleted_or_not_found(affected_rows: usize, entity: Entity) -> Result<(), StoreError>{
    if affected_rows == 0 {
        return Err(StoreError::NotFound(entity))
    }

    Ok(())
}

#[tracing::instrument(
    "Deleting user with its orders",
    skip(conn)
)]
pub async fn delete_user(
    mut conn: DbConnection,
    user_id: i32
) -> Result<(), StoreError> {
    let affected_rows = spawn_blocking_with_tracing(move || {
        diesel::delete(users::table.find(user_id))
            .execute(&mut conn)
            .map_err(StoreError::QueryError)
    })
    .await??;

    deleted_or_not_found(affected_rows, Entity::User)
}

#[tracing::instrument(
    "Deleting product",
    skip(conn)
)]
pub async fn delete_product(
    mut conn: DbConnection,
    product_id: i32
) -> Result<(), StoreError> {
    let affected_rows = spawn_blocking_with_tracing(move || {
        diesel::delete(products::table.find(product_id))
            .execute(&mut conn)
            .map_err(StoreError::QueryError)
    })
    .await??;

    deleted_or_not_found(affected_rows, Entity::Product)
}

#[tracing::instrument(
    "Deleting order",
    skip(conn)
)]
pub async fn delete_order(
    mut conn: DbConnection,
    order_id: i32
) -> Result<(), StoreError> {
    let affected_rows = spawn_blocking_with_tracing(move || {
        diesel::delete(orders::table.find(order_id))
            .execute(&mut conn)
            .map_err(StoreError::QueryError)
    })
    .await??;

    deleted_or_not_found(affected_rows, Entity::Order)
}
