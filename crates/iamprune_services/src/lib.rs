mod collector;
mod executor;
mod infra;
mod prune;

#[cfg(test)]
mod mock;

pub use collector::*;
pub use executor::*;
pub use infra::*;
pub use prune::*;
