//! Native module contract and ABI boundary.
//!
//! A loadable service module is a dynamic library exporting two symbols:
//!
//! - [`SERVICE_MODULE_INIT_SYMBOL`] (required): invoked with zero arguments,
//!   returns a pointer to a [`ServiceModuleHandle`], or null to signal
//!   initialization failure. This is the sole way a module becomes visible
//!   to the host.
//! - [`SERVICE_MODULE_EXIT_SYMBOL`] (optional): invoked with the module
//!   handle as its only argument during shutdown, letting the module release
//!   whatever it allocated. A module without this symbol is simply not
//!   notified before its library is released.
//!
//! The [`declare_service_module!`](crate::declare_service_module) macro emits
//! both entry points for a module crate.

use crate::registry::ServiceRegistry;
use crate::server::ServerInterface;

/// Export name of the required module initialization entry point.
pub const SERVICE_MODULE_INIT_SYMBOL: &[u8] = b"mapserv_service_module_init";

/// Export name of the optional module teardown entry point.
pub const SERVICE_MODULE_EXIT_SYMBOL: &[u8] = b"mapserv_service_module_exit";

/// Type of the required initialization entry point.
pub type ServiceModuleInitFn = unsafe extern "C" fn() -> *mut ServiceModuleHandle;

/// Type of the optional teardown entry point.
pub type ServiceModuleExitFn = unsafe extern "C" fn(*mut ServiceModuleHandle);

/// A dynamically loaded unit of server functionality.
///
/// Modules advertise the services they implement by registering them with
/// the [`ServiceRegistry`] the host passes in. The host calls
/// [`register_self`](ServiceModule::register_self) once per directory scan,
/// so the implementation must be safe to repeat.
pub trait ServiceModule {
    /// Register the services this module provides.
    fn register_self(&mut self, registry: &mut ServiceRegistry, server: &dyn ServerInterface);
}

/// Opaque handle a module's init entry point hands across the library
/// boundary.
///
/// The handle owns the module object. Host and module must be built against
/// the same SDK version; the layout is not stable across versions.
pub struct ServiceModuleHandle {
    module: Box<dyn ServiceModule>,
}

impl ServiceModuleHandle {
    /// Wrap a module for export.
    pub fn new(module: Box<dyn ServiceModule>) -> Self {
        Self { module }
    }

    /// Move the handle onto the heap and leak it as a raw pointer, the form
    /// returned by the init entry point.
    pub fn into_raw(self) -> *mut ServiceModuleHandle {
        Box::into_raw(Box::new(self))
    }

    /// Reclaim ownership of a handle previously produced by
    /// [`into_raw`](ServiceModuleHandle::into_raw).
    ///
    /// # Safety
    ///
    /// `raw` must have been produced by `into_raw` and not reclaimed since.
    pub unsafe fn from_raw(raw: *mut ServiceModuleHandle) -> Box<ServiceModuleHandle> {
        unsafe { Box::from_raw(raw) }
    }

    /// Access the wrapped module.
    pub fn module_mut(&mut self) -> &mut dyn ServiceModule {
        self.module.as_mut()
    }
}
