mod config;
mod error;
mod outcome;
mod policy;
mod repo;

pub use config::*;
pub use error::*;
pub use outcome::*;
pub use policy::*;
pub use repo::*;
