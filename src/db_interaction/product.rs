use diesel::{dsl::exists, ExpressionMethods, OptionalExtension, QueryDsl, QueryResult, RunQueryDsl, SelectableHelper};

use crate::{models::{NewProduct, Product}, schema::products, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::{Entity, StoreError};

pub fn product_exists(conn: &mut DbConnection, product_id: i32) -> QueryResult<bool>{
    diesel::select(exists(products::table.find(product_id)))
        .get_result::<bool>(conn)
}

#[tracing::instrument(
    "Inserting product into the database",
    skip(conn)
)]
pub async fn insert_product(
    mut conn: DbConnection,
    new_product: NewProduct
) -> Result<Product, StoreError> {
    let product = spawn_blocking_with_tracing(move || {
        diesel::insert_into(products::table)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result::<Product>(&mut conn)
    })
    .await??;

    Ok(product)
}

#[tracing::instrument(
    "Getting all products from db",
    skip_all
)]
pub async fn get_all_products(
    mut conn: DbConnection
) -> Result<Vec<Product>, StoreError> {
    let products = spawn_blocking_with_tracing(move || {
        products::table
            .select(Product::as_select())
            .order(products::id.asc())
            .load::<Product>(&mut conn)
    })
    .await??;

    Ok(products)
}

#[tracing::instrument(
    "Getting product by id",
    skip(conn)
)]
pub async fn get_product_by_id(
    mut conn: DbConnection,
    product_id: i32
) -> Result<Product, StoreError> {
    let product = spawn_blocking_with_tracing(move || {
        products::table
            .find(product_id)
            .select(Product::as_select())
            .first::<Product>(&mut conn)
            .optional()
    })
    .await??;

    product.ok_or(StoreError::NotFound(Entity::Product))
}

#[tracing::instrument(
    "Updating product in db",
    skip(conn)
)]
pub async fn update_product(
    mut conn: DbConnection,
    product_id: i32,
    changes: NewProduct
) -> Result<Product, StoreError> {
    let product = spawn_blocking_with_tracing(move || {
        diesel::update(products::table.find(product_id))
            .set(&changes)
            .returning(Product::as_returning())
            .get_result::<Product>(&mut conn)
            .optional()
    })
    .await??;

    product.ok_or(StoreError::NotFound(Entity::Product))
}
