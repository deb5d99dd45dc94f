//! # notiz
//!
//! A note shelf library with a thin CLI on top. The layers, outside in:
//!
//! - **Session** ([`session`]): owns the read/mutation contract. Reads go
//!   through a snapshot cache; every successful mutation invalidates it
//!   before returning, and a successful delete also clears the active
//!   search. Nothing else touches the cache or the list state.
//! - **Access** ([`api`]): a deliberately coarse facade. Each operation
//!   collapses every underlying failure into one fixed message, so callers
//!   can show a stable string without caring what went wrong.
//! - **Store** ([`store`]): the persistence authority. The whole shelf is
//!   one JSON document behind a [`store::StorageBackend`], with the
//!   per-note rules (id assignment, edit surface, the one-way shared flag)
//!   enforced here.
//! - **List pipeline** ([`query`] + [`state`]): a pure function from
//!   shelf, query and page to one rendered page, driven by a reducer over
//!   `{query, page}`. Filtering never renumbers notes.
//!
//! The binary wires these together and owns all terminal I/O. From the
//! session inward, code never prints, never exits and never assumes a
//! terminal.

pub mod api;
pub mod cache;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod init;
pub mod model;
pub mod query;
pub mod render;
pub mod session;
pub mod state;
pub mod store;

pub use error::{NotizError, Result};
