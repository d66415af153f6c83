use diesel::prelude::{AsChangeset, Insertable, Queryable, Selectable};
use serde::Deserialize;
use serde::Serialize;

use crate::schema::order_product;
use crate::schema::orders;
use crate::schema::products;
use crate::schema::users;

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User{
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String
}

// Used for both inserts and full replacement updates
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUser{
    pub name: String,
    pub email: String,
    pub address: String
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product{
    pub id: i32,
    pub name: String,
    pub price: f64
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProduct{
    pub name: String,
    pub price: f64
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order{
    pub id: i32,
    pub order_date: String,
    pub user_id: i32
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder{
    pub order_date: String,
    pub user_id: i32
}

// Row of the order <-> product membership relation
#[derive(Queryable, Insertable, Debug, Clone, Copy, PartialEq)]
#[diesel(table_name = order_product)]
pub struct OrderProduct{
    pub order_id: i32,
    pub product_id: i32
}
