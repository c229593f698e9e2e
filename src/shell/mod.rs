// Composition root for the hall pass station.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the persistent store, clock and capture source.
// - Load the session controller and wire it into the HTTP and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
