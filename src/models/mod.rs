//! # Typed Entity Models
//!
//! Explicit record schemas for the platform's entities, parsed at the
//! store boundary instead of trusting field shapes at call sites. Store
//! documents use camelCase keys; every struct here renames accordingly.
//!
//! The `*View` types parse whole
//! [`HydratedAggregate`](crate::hydration::HydratedAggregate) snapshots;
//! malformed documents are rejected with a
//! [`ModelError`](crate::errors::ModelError) rather than propagated as
//! loose JSON.

mod member;
mod organization;
pub mod presets;
mod program;
mod user;

pub use member::{Member, MemberRole};
pub use organization::{Organization, OrganizationSummary, OrganizationView};
pub use program::Program;
pub use user::{Membership, UserMembershipsView, UserProfile};
