// Composition root: configuration, shared application state and the HTTP and
// GraphQL surfaces over the events context.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
