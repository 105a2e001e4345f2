pub mod catalog;
pub mod content;
pub mod domain;

pub use catalog::Catalog;
pub use content::Content;
pub use domain::{CreateDomain, Domain};
