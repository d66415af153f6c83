pub mod post;
pub mod get;
pub mod delete;
pub mod membership;

pub use post::*;
pub use get::*;
pub use delete::*;
pub use membership::*;
