pub mod post;
pub mod get;
pub mod update;
pub mod delete;
pub mod export;

pub use post::*;
pub use get::*;
pub use update::*;
pub use delete::*;
pub use export::*;
