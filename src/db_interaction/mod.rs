pub mod user;
pub mod product;
pub mod order;
pub mod membership;
pub mod relations;
pub mod cascade;

pub use user::*;
pub use product::*;
pub use order::*;
pub use membership::*;
pub use relations::*;
pub use cascade::*;

use std::{error::Error, fmt::Debug};

use diesel::result::DatabaseErrorKind;
use thiserror::Error;

use crate::utils::error_fmt_chain;

// Constraint names fixed by the migrations
const USERS_EMAIL_KEY: &str = "users_email_key";
const ORDER_PRODUCT_PKEY: &str = "order_product_pkey";
const ORDERS_USER_ID_FKEY: &str = "orders_user_id_fkey";
const ORDER_PRODUCT_ORDER_ID_FKEY: &str = "order_product_order_id_fkey";
const ORDER_PRODUCT_PRODUCT_ID_FKEY: &str = "order_product_product_id_fkey";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity{
    User,
    Product,
    Order
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Entity::User => "User",
            Entity::Product => "Product",
            Entity::Order => "Order"
        };
        f.write_str(name)
    }
}

// Errors raised by store operations
#[derive(Error)]
pub enum StoreError{
    #[error("{0} not found")]
    NotFound(Entity),
    #[error("Email already registered")]
    EmailNotUnique,
    #[error("Product already in order")]
    ProductAlreadyInOrder,
    #[error("Product not in order")]
    ProductNotInOrder,
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    QueryError(#[source] diesel::result::Error)
}

impl Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Violations of the named constraints become domain errors, the store is the
// one deciding uniqueness and referential integrity
impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        if let diesel::result::Error::DatabaseError(kind, info) = &error {
            let classified = match (kind, info.constraint_name()) {
                (DatabaseErrorKind::UniqueViolation, Some(USERS_EMAIL_KEY)) => Some(StoreError::EmailNotUnique),
                (DatabaseErrorKind::UniqueViolation, Some(ORDER_PRODUCT_PKEY)) => Some(StoreError::ProductAlreadyInOrder),
                (DatabaseErrorKind::ForeignKeyViolation, Some(ORDERS_USER_ID_FKEY)) => Some(StoreError::NotFound(Entity::User)),
                (DatabaseErrorKind::ForeignKeyViolation, Some(ORDER_PRODUCT_ORDER_ID_FKEY)) => Some(StoreError::NotFound(Entity::Order)),
                (DatabaseErrorKind::ForeignKeyViolation, Some(ORDER_PRODUCT_PRODUCT_ID_FKEY)) => Some(StoreError::NotFound(Entity::Product)),
                _ => None
            };

            if let Some(classified) = classified {
                return classified
            }
        }

        StoreError::QueryError(error)
    }
}
