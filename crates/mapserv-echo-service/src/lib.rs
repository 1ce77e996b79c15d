//! Minimal native service module.
//!
//! Build this crate and drop the resulting library into the server's module
//! directory (`MAPSERV_MODULES_DIR`) to see the loader pick it up. It
//! registers a single `ECHO` service and serves as the reference for module
//! authors.

use mapserv_service_sdk::prelude::*;

struct EchoService;

impl Service for EchoService {
    fn name(&self) -> &str {
        "ECHO"
    }

    fn version(&self) -> &str {
        "1.0.0"
    }
}

#[derive(Default)]
struct EchoServiceModule;

impl ServiceModule for EchoServiceModule {
    fn register_self(&mut self, registry: &mut ServiceRegistry, server: &dyn ServerInterface) {
        tracing::info!(server_version = server.version(), "registering echo service");
        registry.register_service(Box::new(EchoService));
    }
}

fn create_module() -> Option<EchoServiceModule> {
    Some(EchoServiceModule)
}

declare_service_module!(EchoServiceModule, create_module);
