use serde::Deserialize;
use validator::Validate;

use crate::models::NewOrder;

use super::not_blank;

// `order_date` is kept as the caller sent it, it is not parsed as a date
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct OrderPayload{
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub order_date: String,
    pub user_id: i32
}

impl From<OrderPayload> for NewOrder {
    fn from(payload: OrderPayload) -> Self {
        NewOrder{
            order_date: payload.order_date,
            user_id: payload.user_id
        }
    }
}
