//! Read models and request types
//!
//! Rows are decoded straight from the gateway's JSON. Request input is
//! validated when the request types are built; invalid input returns
//! ValidationError, not panic.

pub mod company;
pub mod industry;
pub mod location;
pub mod pagination;
pub mod validation;

pub use company::{format_location, CompanyFilter, CompanyRead, CompanyRecord, Embedded};
pub use industry::IndustryRead;
pub use location::LocationRead;
pub use pagination::{PageRequest, Paginated, DEFAULT_SIZE, MAX_SIZE};
pub use validation::ValidationError;
