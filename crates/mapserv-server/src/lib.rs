//! mapserv server host library.
//!
//! The server extends its request handling through native service modules:
//! dynamic libraries discovered in a flat directory, loaded exactly once per
//! distinct location, and handed to the service registry so they can
//! register the services they implement. See the [`modules`] module for the
//! loader itself and [`settings`] for how the module directory is resolved.

pub mod modules;
pub mod settings;

pub use modules::{
    module_suffix, DynamicLibraryBackend, LibraryBackend, LibraryError, LoadedLibrary,
    NativeModuleLoader,
};
pub use settings::ServerSettings;
