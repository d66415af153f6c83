use diesel::{dsl::exists, ExpressionMethods, OptionalExtension, QueryDsl, QueryResult, RunQueryDsl, SelectableHelper};

use crate::{models::{NewOrder, Order}, schema::orders, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::{Entity, StoreError};

pub fn order_exists(conn: &mut DbConnection, order_id: i32) -> QueryResult<bool>{
    diesel::select(exists(orders::table.find(order_id)))
        .get_result::<bool>(conn)
}

// The owning user is checked by the foreign key, a missing one maps to
// StoreError::NotFound(Entity::User)
#[tracing::instrument(
    "Inserting order into the database",
    skip(conn)
)]
pub async fn insert_order(
    mut conn: DbConnection,
    new_order: NewOrder
) -> Result<Order, StoreError> {
    let order = spawn_blocking_with_tracing(move || {
        diesel::insert_into(orders::table)
            .values(&new_order)
            .returning(Order::as_returning())
            .get_result::<Order>(&mut conn)
    })
    .await??;

    Ok(order)
}

#[tracing::instrument(
    "Getting all orders from db",
    skip_all
)]
pub async fn get_all_orders(
    mut conn: DbConnection
) -> Result<Vec<Order>, StoreError> {
    let orders = spawn_blocking_with_tracing(move || {
        orders::table
            .select(Order::as_select())
            .order(orders::id.asc())
            .load::<Order>(&mut conn)
    })
    .await??;

    Ok(orders)
}

#[tracing::instrument(
    "Getting order by id",
    skip(conn)
)]
pub async fn get_order_by_id(
    mut conn: DbConnection,
    order_id: i32
) -> Result<Order, StoreError> {
    let order = spawn_blocking_with_tracing(move || {
        orders::table
            .find(order_id)
            .select(Order::as_select())
            .first::<Order>(&mut conn)
            .optional()
    })
    .await??;

    order.ok_or(StoreError::NotFound(Entity::Order))
}
