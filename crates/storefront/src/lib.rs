//! Cosmo Wholesale storefront library.
//!
//! Server-rendered catalog browser for a wholesale cosmetics store. This
//! crate provides the storefront as a library so the router can be built
//! and exercised in tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::app;
