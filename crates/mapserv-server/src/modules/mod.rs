//! Native service module loading.
//!
//! A deployment drops dynamic libraries into a single flat directory; the
//! loader picks up every file matching the platform library suffix, resolves
//! the SDK entry points, and lets each module register its services. Modules
//! are torn down once, at shutdown.

pub mod library;
pub mod loader;

pub use library::{DynamicLibraryBackend, LibraryBackend, LibraryError, LoadedLibrary};
pub use loader::{module_suffix, NativeModuleLoader};
