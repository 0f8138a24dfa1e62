//! Service layer: composes repository reads into response shapes

pub mod companies;
pub mod industries;
pub mod locations;

pub use companies::list_companies;
pub use industries::list_industries;
pub use locations::list_locations;
