use serde::Deserialize;
use validator::Validate;

use crate::models::NewUser;

use super::not_blank;

// Body of POST /users and PUT /users/{id}, a PUT replaces every field
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct UserPayload{
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub name: String,
    #[validate(email, length(max = 200))]
    pub email: String,
    #[validate(length(max = 300))]
    pub address: String
}

impl From<UserPayload> for NewUser {
    fn from(payload: UserPayload) -> Self {
        NewUser{
            name: payload.name,
            email: payload.email,
            address: payload.address
        }
    }
}
