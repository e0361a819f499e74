// Per-tab root controller, its in-memory store and the HTTP surface over it.

pub mod controller;
pub mod handlers;
pub mod store;
