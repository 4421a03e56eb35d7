#![allow(clippy::doc_markdown)] // Allow technical terms like camelCase, TOML in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # OrgData Core
//!
//! Data-layer core of the OrgData organization-management platform:
//! aggregate hydration over a pluggable document store.
//!
//! ## Overview
//!
//! The platform stores organizations, their members and programs, and
//! user profiles as documents in a hosted document database. Pages read
//! whole aggregates: an organization plus its subcollections, with member
//! records enriched by the user profile each one references. This crate
//! owns that read path — one canonical hydration algorithm instead of the
//! per-page copies it replaced — along with the store abstraction, the
//! typed entity models parsed at the store boundary, session context,
//! configuration, and logging bootstrap.
//!
//! ## Module Organization
//!
//! - [`hydration`] - The aggregate hydrator, slot configuration, and the
//!   hydrated snapshot type
//! - [`store`] - Document-store client abstraction and the in-memory
//!   implementation
//! - [`models`] - Typed entity schemas and hydrated views
//! - [`context`] - Explicit per-session dependency container
//! - [`config`] - Environment-aware configuration loading
//! - [`errors`] - Structured error handling
//! - [`logging`] - Tracing subscriber bootstrap
//!
//! ## Quick Start
//!
//! ```rust
//! use orgdata_core::{AggregateHydrator, CollectionPath, InMemoryDocumentStore, SlotConfig};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let store = Arc::new(InMemoryDocumentStore::new());
//! let orgs = CollectionPath::new("organizations");
//! store.insert_json(&orgs, "org-1", json!({"name": "Acme"}));
//!
//! let hydrator = AggregateHydrator::new(store);
//! let aggregate = hydrator
//!     .hydrate(
//!         "organizations",
//!         "org-1",
//!         &[SlotConfig::passthrough("programs", "programs")],
//!     )
//!     .await
//!     .unwrap();
//!
//! assert_eq!(aggregate.field("name"), Some(&json!("Acme")));
//! assert!(aggregate.records("programs").unwrap().is_empty());
//! # });
//! ```
//!
//! ## Failure Policy
//!
//! Root resolution is strict: a missing root fails the call, and nothing
//! below it is read. Everything below the root degrades instead of
//! failing — empty slots stay present as `[]`, unresolved references
//! inline `null` and keep their record. A rendered page with partial
//! detail beats no page.

pub mod config;
pub mod context;
pub mod errors;
pub mod hydration;
pub mod logging;
pub mod models;
pub mod store;

pub use config::{ConfigurationError, CoreConfig, HydrationConfig, LoggingConfig};
pub use context::SessionContext;
pub use errors::{HydrationError, HydrationResult, ModelError, ModelResult};
pub use hydration::{AggregateHydrator, HydratedAggregate, ReferenceSpec, SlotConfig};
pub use logging::init_logging;
pub use models::{
    Member, MemberRole, Membership, Organization, OrganizationSummary, OrganizationView, Program,
    UserMembershipsView, UserProfile,
};
pub use store::{
    CollectionPath, Document, DocumentStore, InMemoryDocumentStore, StoreError, StoreResult,
};
