//! Immutable view records built from backend payloads.

pub mod activity;
pub mod client;
pub mod conversation;
pub mod engagement;
pub mod order;
pub mod phase;
pub mod project;
pub mod proposal;
pub mod status;
pub mod types;
