//! Desktop marketing app for the Kodai Cool Stay boutique hotel.
//!
//! The application is organized into focused domains (ui, rooms, contact,
//! gallery) routed through a single [`common::messages::DomainMessage`]
//! enum, with shared infrastructure for the inquiry relay client and
//! asset loading.

pub mod app;
pub mod common;
pub mod content;
pub mod domains;
pub mod infrastructure;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
