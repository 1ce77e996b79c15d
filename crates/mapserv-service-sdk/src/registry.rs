//! Service registry.
//!
//! The registry collects the services advertised by loaded modules. Lookup
//! is by case-insensitive service name, optionally narrowed to a specific
//! version; the first version registered under a name becomes that name's
//! default.

use std::collections::HashMap;

use crate::service::Service;

/// Versions registered under one service name.
struct ServiceTable {
    default_version: String,
    versions: HashMap<String, Box<dyn Service>>,
}

/// Registry of services keyed by uppercased name and version.
///
/// Registration is idempotent: registering a service with a name and version
/// that are already present replaces the previous entry, so modules may
/// safely re-register on every directory scan.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<String, ServiceTable>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service, taking ownership of it.
    pub fn register_service(&mut self, service: Box<dyn Service>) {
        let key = service.name().to_uppercase();
        let version = service.version().to_string();
        tracing::debug!(service = %key, %version, "registering service");

        match self.services.get_mut(&key) {
            Some(table) => {
                if table.versions.insert(version.clone(), service).is_some() {
                    tracing::debug!(service = %key, %version, "replaced already registered service");
                }
            }
            None => {
                let mut versions = HashMap::new();
                versions.insert(version.clone(), service);
                self.services.insert(
                    key,
                    ServiceTable {
                        default_version: version,
                        versions,
                    },
                );
            }
        }
    }

    /// Look up the default version of a service.
    pub fn service(&self, name: &str) -> Option<&dyn Service> {
        let table = self.services.get(&name.to_uppercase())?;
        table
            .versions
            .get(&table.default_version)
            .map(|service| service.as_ref())
    }

    /// Look up a specific version of a service.
    pub fn service_version(&self, name: &str, version: &str) -> Option<&dyn Service> {
        self.services
            .get(&name.to_uppercase())?
            .versions
            .get(version)
            .map(|service| service.as_ref())
    }

    /// Whether any version of the named service is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.services.contains_key(&name.to_uppercase())
    }

    /// Remove every version of the named service. Returns the number of
    /// versions removed.
    pub fn deregister_service(&mut self, name: &str) -> usize {
        match self.services.remove(&name.to_uppercase()) {
            Some(table) => {
                tracing::debug!(service = %name.to_uppercase(), "deregistering service");
                table.versions.len()
            }
            None => 0,
        }
    }

    /// Number of registered services, counting each version separately.
    pub fn len(&self) -> usize {
        self.services.values().map(|table| table.versions.len()).sum()
    }

    /// Whether the registry holds no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Remove all registered services.
    pub fn cleanup(&mut self) {
        self.services.clear();
    }
}
