//! mapserv service module SDK.
//!
//! This crate defines the contract between the mapserv server host and the
//! native service modules it loads at runtime:
//!
//! - the [`ServiceModule`] trait a module implements to advertise its
//!   services,
//! - the [`Service`] trait and the [`ServiceRegistry`] that collects
//!   registered services,
//! - the [`ServerInterface`] context handed through to modules during
//!   self-registration,
//! - the ABI boundary ([`ServiceModuleHandle`], the entry-point function
//!   types and the fixed export symbol names) and the
//!   [`declare_service_module!`] macro that emits it.
//!
//! # Quick Start
//!
//! ```rust
//! use mapserv_service_sdk::prelude::*;
//!
//! #[derive(Default)]
//! struct MyService;
//!
//! impl Service for MyService {
//!     fn name(&self) -> &str {
//!         "MYSERVICE"
//!     }
//!
//!     fn version(&self) -> &str {
//!         "1.0.0"
//!     }
//! }
//!
//! #[derive(Default)]
//! struct MyServiceModule;
//!
//! impl ServiceModule for MyServiceModule {
//!     fn register_self(&mut self, registry: &mut ServiceRegistry, _server: &dyn ServerInterface) {
//!         registry.register_service(Box::new(MyService));
//!     }
//! }
//!
//! fn create_module() -> Option<MyServiceModule> {
//!     Some(MyServiceModule)
//! }
//!
//! // In a `cdylib` crate this exports the init/exit entry points:
//! // declare_service_module!(MyServiceModule, create_module);
//! ```

pub mod module;
pub mod registry;
pub mod server;
pub mod service;

#[macro_use]
mod macros;

pub use module::{
    ServiceModule, ServiceModuleExitFn, ServiceModuleHandle, ServiceModuleInitFn,
    SERVICE_MODULE_EXIT_SYMBOL, SERVICE_MODULE_INIT_SYMBOL,
};
pub use registry::ServiceRegistry;
pub use server::ServerInterface;
pub use service::Service;

/// Prelude module with the imports a service module crate needs.
pub mod prelude {
    pub use crate::declare_service_module;
    pub use crate::module::{ServiceModule, ServiceModuleHandle};
    pub use crate::registry::ServiceRegistry;
    pub use crate::server::ServerInterface;
    pub use crate::service::Service;
}
