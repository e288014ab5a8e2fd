//! Loading and validation of the card catalog and game config.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
