#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # shelter
//!
//! An embedded store for pet records.
//!
//! Records live in a single `SQLite` table and are addressed by resource
//! identifiers: `pets` for the whole collection and `pets/{id}` for one pet.
//! Every write is validated before it reaches the store, runs in its own
//! transaction, and notifies observers of the written resource and of its
//! parent collection.
//!
//! ## Core Types
//!
//! - [`PetProvider`]: URI-addressed CRUD over the store
//! - [`Pet`], [`PetValues`] and [`Gender`]: records and partial field sets
//! - [`Resource`]: the router for resource identifiers
//! - [`ChangeNotifier`] and [`Subscription`]: change observation
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use shelter::{Filter, Gender, PetProvider, PetValues};
//!
//! let provider = PetProvider::in_memory().unwrap();
//! let changes = provider.subscribe("pets").unwrap();
//!
//! let toto = PetValues::new()
//!     .name("Toto")
//!     .breed("Terrier")
//!     .gender(Gender::Male)
//!     .weight(7);
//! let resource = provider.insert("pets", toto).unwrap();
//! assert_eq!(resource.to_string(), "pets/1");
//!
//! let pet = provider.get("pets/1").unwrap().unwrap();
//! assert_eq!(pet.name, "Toto");
//! assert!(changes.try_recv().is_some());
//!
//! let updated = provider
//!     .update("pets/1", PetValues::new().weight(9), &Filter::all())
//!     .unwrap();
//! assert_eq!(updated, 1);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod pet;
pub mod provider;
pub mod resource;
pub mod validation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Column, Database, DatabaseConfig, Filter, SortOrder, UpgradePolicy};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use notify::{ChangeEvent, ChangeKind, ChangeNotifier, Subscription};
pub use output::OutputFormat;
pub use pet::{Gender, Pet, PetValues};
pub use provider::{PetCursor, PetProvider};
pub use resource::{Resource, CONTENT_AUTHORITY};
