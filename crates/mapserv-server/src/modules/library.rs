//! Capability-typed access to dynamic libraries.
//!
//! The loader is written against [`LibraryBackend`] and [`LoadedLibrary`]
//! rather than against `libloading` directly, so tests can substitute an
//! in-process fake. [`DynamicLibraryBackend`] is the production
//! implementation.

use std::path::{Path, PathBuf};

use mapserv_service_sdk::{
    ServiceModuleExitFn, ServiceModuleInitFn, SERVICE_MODULE_EXIT_SYMBOL,
    SERVICE_MODULE_INIT_SYMBOL,
};

/// Error opening a dynamic library.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The file could not be loaded as a dynamic library.
    #[error("failed to load library {path}: {reason}")]
    Open {
        /// Path of the candidate file.
        path: PathBuf,
        /// Loader-reported cause.
        reason: String,
    },
}

/// An open dynamic library. Dropping the value releases the underlying
/// library handle.
pub trait LoadedLibrary {
    /// Resolve the required init entry point, if exported.
    fn init_entry(&self) -> Option<ServiceModuleInitFn>;

    /// Resolve the optional exit entry point, if exported.
    fn exit_entry(&self) -> Option<ServiceModuleExitFn>;
}

/// Opens dynamic libraries from the filesystem.
pub trait LibraryBackend {
    /// Open the library at `path`.
    fn open(&self, path: &Path) -> Result<Box<dyn LoadedLibrary>, LibraryError>;
}

/// Production backend over `libloading`.
pub struct DynamicLibraryBackend;

struct DynamicLibrary {
    library: libloading::Library,
}

impl LoadedLibrary for DynamicLibrary {
    fn init_entry(&self) -> Option<ServiceModuleInitFn> {
        // Function pointers copied out of a Symbol stay valid for as long as
        // the library itself is kept open.
        unsafe {
            self.library
                .get::<ServiceModuleInitFn>(SERVICE_MODULE_INIT_SYMBOL)
                .ok()
                .map(|symbol| *symbol)
        }
    }

    fn exit_entry(&self) -> Option<ServiceModuleExitFn> {
        unsafe {
            self.library
                .get::<ServiceModuleExitFn>(SERVICE_MODULE_EXIT_SYMBOL)
                .ok()
                .map(|symbol| *symbol)
        }
    }
}

impl LibraryBackend for DynamicLibraryBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn LoadedLibrary>, LibraryError> {
        let library = unsafe {
            libloading::Library::new(path).map_err(|err| LibraryError::Open {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?
        };
        Ok(Box::new(DynamicLibrary { library }))
    }
}
