//! Session context: the explicit dependency container for data access.
//!
//! Pages and services receive a [`SessionContext`] instead of reading
//! ambient globals for "the current user" and "the current organization".
//! The context is created when a session starts, passed by reference to
//! everything that needs contextual data, and torn down explicitly when
//! the session ends.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::config::CoreConfig;
use crate::hydration::AggregateHydrator;
use crate::store::DocumentStore;

/// Shared per-session dependencies and identity.
///
/// Holds the authenticated user, the optionally-selected active
/// organization, the shared store handle, and the loaded configuration.
/// Hydrators are produced from the context so every call site reads
/// through the same store with the same settings.
pub struct SessionContext<S> {
    /// Session instance id, logged by everything the session does.
    pub session_id: Uuid,

    /// The authenticated user's document id.
    pub user_id: String,

    /// The organization the session currently operates on, if one has
    /// been selected.
    pub active_org: Option<String>,

    store: Arc<S>,
    config: Arc<CoreConfig>,
}

impl<S> std::fmt::Debug for SessionContext<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("session_id", &self.session_id)
            .field("user_id", &self.user_id)
            .field("active_org", &self.active_org)
            .field("store", &"Arc<S>")
            .field("environment", &self.config.environment)
            .finish()
    }
}

impl<S: DocumentStore> SessionContext<S> {
    /// Open a session for an authenticated user.
    pub fn open(user_id: impl Into<String>, store: Arc<S>, config: CoreConfig) -> Self {
        let session_id = Uuid::new_v4();
        let user_id = user_id.into();
        info!(%session_id, user_id, environment = %config.environment, "🔧 Session opened");
        Self {
            session_id,
            user_id,
            active_org: None,
            store,
            config: Arc::new(config),
        }
    }

    /// Select the organization subsequent calls operate on.
    pub fn select_org(&mut self, org_id: impl Into<String>) {
        let org_id = org_id.into();
        info!(session_id = %self.session_id, org_id, "Active organization selected");
        self.active_org = Some(org_id);
    }

    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// A hydrator bound to this session's store and hydration settings.
    pub fn hydrator(&self) -> AggregateHydrator<S> {
        AggregateHydrator::with_config(Arc::clone(&self.store), self.config.hydration.clone())
    }

    /// Tear the session down. Consumes the context so no call site can
    /// keep using it afterwards.
    pub fn close(self) {
        info!(session_id = %self.session_id, user_id = %self.user_id, "✅ Session closed");
    }
}
