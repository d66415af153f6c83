pub mod post;
pub mod get;
pub mod update;
pub mod delete;

pub use post::*;
pub use get::*;
pub use update::*;
pub use delete::*;
