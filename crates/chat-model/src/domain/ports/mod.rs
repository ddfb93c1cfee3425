//! Domain ports for collaborators outside the model.

mod user_lookup;

#[cfg(test)]
pub use user_lookup::MockUserLookup;
pub use user_lookup::{FixtureUserLookup, UserLookup, UserLookupError};
