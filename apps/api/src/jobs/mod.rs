// Job listings: seeded read-only store and the query endpoints over it.

pub mod handlers;
pub mod models;
pub mod store;

pub use store::JobStore;
