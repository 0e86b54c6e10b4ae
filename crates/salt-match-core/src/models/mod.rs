//! Domain models for the salt-match system.

mod composition;
mod link;
mod salt;

pub use composition::*;
pub use link::*;
pub use salt::*;
