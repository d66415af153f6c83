use diesel::{dsl::exists, ExpressionMethods, OptionalExtension, QueryDsl, QueryResult, RunQueryDsl, SelectableHelper};

use crate::{models::{NewUser, User}, schema::users, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::{Entity, StoreError};

pub fn user_exists(conn: &mut DbConnection, user_id: i32) -> QueryResult<bool>{
    diesel::select(exists(users::table.find(user_id)))
        .get_result::<bool>(conn)
}

// A duplicate email surfaces as StoreError::EmailNotUnique through the unique constraint
#[tracing::instrument(
    "Inserting user into the database",
    skip(conn)
)]
pub async fn insert_user(
    mut conn: DbConnection,
    new_user: NewUser
) -> Result<User, StoreError> {
    let user = spawn_blocking_with_tracing(move || {
        diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result::<User>(&mut conn)
    })
    .await??;

    Ok(user)
}

#[tracing::instrument(
    "Getting all users from db",
    skip_all
)]
pub async fn get_all_users(
    mut conn: DbConnection
) -> Result<Vec<User>, StoreError> {
    let users = spawn_blocking_with_tracing(move || {
        users::table
            .select(User::as_select())
            .order(users::id.asc())
            .load::<User>(&mut conn)
    })
    .await??;

    Ok(users)
}

#[tracing::instrument(
    "Getting user by id",
    skip(conn)
)]
pub async fn get_user_by_id(
    mut conn: DbConnection,
    user_id: i32
) -> Result<User, StoreError> {
    let user = spawn_blocking_with_tracing(move || {
        users::table
            .find(user_id)
            .select(User::as_select())
            .first::<User>(&mut conn)
            .optional()
    })
    .await??;

    user.ok_or(StoreError::NotFound(Entity::User))
}

// Replaces name, email and address, the id and the user's orders are untouched
#[tracing::instrument(
    "Updating user in db",
    skip(conn)
)]
pub async fn update_user(
    mut conn: DbConnection,
    user_id: i32,
    changes: NewUser
) -> Result<User, StoreError> {
    let user = spawn_blocking_with_tracing(move || {
        diesel::update(users::table.find(user_id))
            .set(&changes)
            .returning(User::as_returning())
            .get_result::<User>(&mut conn)
            .optional()
    })
    .await??;

    user.ok_or(StoreError::NotFound(Entity::User))
}
