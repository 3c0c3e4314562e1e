//! HTTP request handlers for the web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers that delegate to `HubCore`.

pub mod admin;
pub mod chat;
pub mod collections;
pub mod config;
pub mod content;
pub mod health;
pub mod sync;

