//! Entity search resolution against the GraphQL API.

mod search_entities;
pub use search_entities::{search_anime, search_artists, search_series, search_studios};

pub mod search_gql;
