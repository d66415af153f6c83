use serde::Deserialize;
use validator::Validate;

use crate::models::NewProduct;

use super::not_blank;

#[derive(Deserialize, Validate, Debug, Clone)]
pub struct ProductPayload{
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64
}

impl From<ProductPayload> for NewProduct {
    fn from(payload: ProductPayload) -> Self {
        NewProduct{
            name: payload.name,
            price: payload.price
        }
    }
}
