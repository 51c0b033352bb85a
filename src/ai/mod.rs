//! Computer opponents.
mod random;

pub use random::RandomAgent;
