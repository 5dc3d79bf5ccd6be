use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::anachrovox::Anachrovox;
use crate::traits::{Role, RoleError};

/// Roles available to the host, keyed by [`Role::name`].
#[derive(Clone, Default)]
pub struct RoleRegistry {
    roles: HashMap<String, Arc<dyn Role>>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every role shipped with this crate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Anachrovox);
        registry
    }

    /// Add `role`, replacing any role registered under the same name.
    pub fn register<R: Role + 'static>(&mut self, role: R) {
        debug!(name = role.name(), "registering role");
        self.roles.insert(role.name().to_string(), Arc::new(role));
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Role>, RoleError> {
        self.roles
            .get(name)
            .cloned()
            .ok_or_else(|| RoleError::UnknownRole(name.to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.roles.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
