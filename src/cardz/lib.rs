//! # Cardz Architecture
//!
//! Cardz is a **UI-agnostic catalog library**: a list of technology cards that
//! can be searched, filtered by category, starred, deleted, and extended
//! through a creation form. The terminal client in `cli/` is one way to drive
//! it, not the application itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the session loop, renders screens │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CardzApi: the session object (store, favorites, filter)  │
//! │  - Normalizes inputs (display indexes → card ids)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure catalog logic, returns CmdResult                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore, seed loading             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! All state lives in memory for one session: the ordered catalog, the set of
//! favorite ids, and the current filter criteria. Nothing is written back. The
//! catalog starts from a bundled JSON dataset, or from a file given at startup.
//!
//! ## Derived Data
//!
//! What the user sees is always recomputed from scratch: [`filter`] derives the
//! visible cards and the category chips, [`index`] numbers the visible cards
//! for addressing. Catalogs are tens to hundreds of cards, so there is no
//! caching and no incremental update.
//!
//! ## Module Overview
//!
//! - [`api`]: the session facade, entry point for all operations
//! - [`commands`]: create, delete, favorite, list, show, categories
//! - [`store`]: storage abstraction, in-memory store, seed loader
//! - [`model`]: `Card`, `CardDraft`, `CategoryFilter`, the form categories
//! - [`filter`]: search and category matching
//! - [`favorites`]: the favorite id set
//! - [`form`]: the creation form state
//! - [`index`]: on-screen indexes and selectors
//! - [`config`]: configuration file
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod form;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
