//! # SchoolHelper Remote
//!
//! Client for the external managed auth + database service: password auth
//! with session persistence and change notifications, plus a PostgREST-style
//! table API backing the remote implementation of the data-access façade.

pub mod auth;
pub mod client;
pub mod query;
pub mod store;

pub use auth::AuthClient;
pub use client::{RestClient, RemoteError, RemoteResult};
pub use query::Query;
pub use store::RemoteStore;
