//! # Design Patterns
//!
//! Object creation and collaboration idioms, each runnable on its own.
//!
//! ## Creational
//! - Simple factory: a selector string picks a document constructor
//!   ([`creational::simple_factory`])
//! - Abstract factory: document suites resolved through a static registry
//!   ([`creational::abstract_factory`])
//! - Singleton: one guarded `DatabaseConnection` per process
//!   ([`creational::singleton`])
//! - Builder: consuming builder with optional fields ([`creational::builder`])
//!
//! ## Structural
//! - Adapter ([`structural::adapter`])
//!
//! ## Behavioral
//! - Observer ([`behavioral::observer`])
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin simple_factory
//! cargo run --bin abstract_factory
//! cargo run --bin singleton
//! cargo run --bin builder
//! cargo run --bin adapter
//! cargo run --bin observer
//! ```

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod structural;

pub use creational::abstract_factory::{process_creation, DocumentSuite, FamilyRegistry, FamilyTag};
pub use creational::document::{Document, DocumentKind, LifecycleReport, Stage};
pub use creational::simple_factory::{DocumentFactory, SimpleFactory};
pub use creational::singleton::{ConnectionHandle, DatabaseConnection, SingletonState};
pub use error::{ConfigError, DocumentError, FactoryError, SingletonError};
