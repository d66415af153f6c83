use diesel::{Connection, QueryDsl, RunQueryDsl};

use crate::{models::OrderProduct, schema::order_product, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::{order_exists, product_exists, Entity, StoreError};

// Order is checked before product, so a request naming two missing ids
// reports the order
fn ensure_order_and_product(
    conn: &mut DbConnection,
    order_id: i32,
    product_id: i32
) -> Result<(), StoreError>{
    if !order_exists(conn, order_id)? {
        return Err(StoreError::NotFound(Entity::Order))
    }

    if !product_exists(conn, product_id)? {
        return Err(StoreError::NotFound(Entity::Product))
    }

    Ok(())
}

/// Adds a product to an order's membership set.
///
/// Duplicates are rejected by the `(order_id, product_id)` primary key rather
/// than by looking at the current set first, so two concurrent requests for
/// the same pair cannot both succeed. The losing insert comes back as
/// [`StoreError::ProductAlreadyInOrder`] and nothing is written.
#[tracing::instrument(
    "Adding product to order",
    skip(conn)
)]
pub async fn add_product_to_order(
    mut conn: DbConnection,
    order_id: i32,
    product_id: i32
) -> Result<(), StoreError> {
    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_order_and_product(conn, order_id, product_id)?;

            diesel::insert_into(order_product::table)
                .values(OrderProduct{ order_id, product_id })
                .execute(conn)?;

            Ok(())
        })
    })
    .await??;

    Ok(())
}

/// Removes a product from an order's membership set, leaving every other
/// pair in place. A pair that is not present is reported as
/// [`StoreError::ProductNotInOrder`].
#[tracing::instrument(
    "Removing product from order",
    skip(conn)
)]
pub async fn remove_product_from_order(
    mut conn: DbConnection,
    order_id: i32,
    product_id: i32
) -> Result<(), StoreError> {
    spawn_blocking_with_tracing(move || {
        conn.transaction::<(), StoreError, _>(|conn| {
            ensure_order_and_product(conn, order_id, product_id)?;

            let affected_rows = diesel::delete(order_product::table.find((order_id, product_id)))
                                    .execute(conn)?;

            if affected_rows == 0 {
                return Err(StoreError::ProductNotInOrder)
            }

            Ok(())
        })
    })
    .await??;

    Ok(())
}
