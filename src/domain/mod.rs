pub mod user;
pub mod product;
pub mod order;

pub use user::*;
pub use product::*;
pub use order::*;

use validator::ValidationError;

// Rejects strings made only of whitespace, `length(min = 1)` lets those through
pub fn not_blank(value: &str) -> Result<(), ValidationError>{
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error)
    }

    Ok(())
}
