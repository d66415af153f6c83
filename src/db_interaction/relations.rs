use diesel::{Connection, ExpressionMethods, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{Order, Product}, schema::{order_product, orders, products}, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::{order_exists, user_exists, Entity, StoreError};

// An existing user without orders yields an empty list, not an error
#[tracing::instrument(
    "Getting orders of user",
    skip(conn)
)]
pub async fn get_orders_for_user(
    mut conn: DbConnection,
    user_id: i32
) -> Result<Vec<Order>, StoreError> {
    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<Vec<Order>, StoreError, _>(|conn| {
            if !user_exists(conn, user_id)? {
                return Err(StoreError::NotFound(Entity::User))
            }

            let orders = orders::table
                .filter(orders::user_id.eq(user_id))
                .select(Order::as_select())
                .order(orders::id.asc())
                .load::<Order>(conn)?;

            Ok(orders)
        })
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Getting products in order",
    skip(conn)
)]
pub async fn get_products_for_order(
    mut conn: DbConnection,
    order_id: i32
) -> Result<Vec<Product>, StoreError> {
    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<Vec<Product>, StoreError, _>(|conn| {
            if !order_exists(conn, order_id)? {
                return Err(StoreError::NotFound(Entity::Order))
            }

            let products = order_product::table
                .inner_join(products::table)
                .filter(order_product::order_id.eq(order_id))
                .select(Product::as_select())
                .order(products::id.asc())
                .load::<Product>(conn)?;

            Ok(products)
        })
    })
    .await??;

    Ok(res)
}
