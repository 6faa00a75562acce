// Resume persistence: JSON documents in a flat directory, served back by name.

pub mod filename;
pub mod handlers;
pub mod store;
