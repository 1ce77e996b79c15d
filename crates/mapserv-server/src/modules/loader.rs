//! Native service module loader.
//!
//! Scans a directory for candidate libraries, loads each exactly once per
//! distinct location, resolves the SDK entry points, and hands every loaded
//! module to the service registry for self-registration. All failures are
//! local to the candidate that caused them: a bad library in the directory
//! never aborts the scan of the remaining files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use mapserv_service_sdk::{
    ServerInterface, ServiceModuleExitFn, ServiceModuleHandle, ServiceRegistry,
};

use super::library::{DynamicLibraryBackend, LibraryBackend, LoadedLibrary};

/// Filename suffix of loadable service modules on the current platform.
pub fn module_suffix() -> &'static str {
    if cfg!(windows) {
        "dll"
    } else {
        "so"
    }
}

/// Bookkeeping record for one loaded module.
///
/// The entry is the exclusive owner of both the module handle and the open
/// library for its lifetime. It is created only once library load, required
/// symbol resolution and a non-null init result have all succeeded, and
/// destroyed only by the unload sweep.
struct ModuleEntry {
    location: PathBuf,
    module: NonNull<ServiceModuleHandle>,
    exit_hook: Option<ServiceModuleExitFn>,
    library: Box<dyn LoadedLibrary>,
}

/// Loader for native service modules.
///
/// Single-threaded by contract: [`load_modules`](NativeModuleLoader::load_modules)
/// runs once at startup before request processing begins and
/// [`unload_modules`](NativeModuleLoader::unload_modules) once at shutdown
/// after it has stopped. The entry table is not synchronized; hosts needing
/// concurrent access must serialize it externally.
pub struct NativeModuleLoader {
    backend: Box<dyn LibraryBackend>,
    entries: HashMap<PathBuf, ModuleEntry>,
}

impl NativeModuleLoader {
    /// Create a loader backed by the platform dynamic linker.
    pub fn new() -> Self {
        Self::with_backend(Box::new(DynamicLibraryBackend))
    }

    /// Create a loader over a custom library backend.
    pub fn with_backend(backend: Box<dyn LibraryBackend>) -> Self {
        Self {
            backend,
            entries: HashMap::new(),
        }
    }

    /// Load every candidate module in `dir` and let each one register its
    /// services.
    ///
    /// Candidates are the regular files whose name matches the platform
    /// library suffix, visited in case-insensitive filename order. Modules
    /// already loaded from an earlier scan are not re-initialized, but their
    /// registration runs again; the registration call is idempotent from the
    /// module's side. Failed candidates are logged and skipped.
    pub fn load_modules(
        &mut self,
        dir: &Path,
        registry: &mut ServiceRegistry,
        server: &dyn ServerInterface,
    ) {
        tracing::debug!(path = %dir.display(), "checking directory for native service modules");

        for location in list_candidates(dir) {
            let Some(mut handle) = self.load_native_module(&location) else {
                continue;
            };
            // The entry table keeps the handle's allocation alive until the
            // unload sweep, so the pointer is valid here.
            let module = unsafe { handle.as_mut().module_mut() };
            module.register_self(registry, server);
        }
    }

    /// Load the module at `location`, or return the cached handle if that
    /// location was already loaded.
    ///
    /// Returns `None` when the library cannot be opened, does not export the
    /// init entry point, or its init entry point returns a null handle; in
    /// every such case the library handle is released before returning and
    /// no entry is created. The returned pointer stays valid until
    /// [`unload_modules`](NativeModuleLoader::unload_modules).
    pub fn load_native_module(&mut self, location: &Path) -> Option<NonNull<ServiceModuleHandle>> {
        if let Some(entry) = self.entries.get(location) {
            return Some(entry.module);
        }

        tracing::debug!(path = %location.display(), "loading native service module");
        let library = match self.backend.open(location) {
            Ok(library) => library,
            Err(err) => {
                tracing::warn!(path = %location.display(), %err, "failed to load library");
                return None;
            }
        };

        let Some(init) = library.init_entry() else {
            tracing::warn!(path = %location.display(), "no entry point found in module");
            // Dropping `library` releases the handle.
            return None;
        };

        let module = unsafe { init() };
        let Some(module) = NonNull::new(module) else {
            tracing::warn!(path = %location.display(), "entry point returned no module");
            return None;
        };

        let exit_hook = library.exit_entry();
        self.entries.insert(
            location.to_path_buf(),
            ModuleEntry {
                location: location.to_path_buf(),
                module,
                exit_hook,
                library,
            },
        );
        Some(module)
    }

    /// Tear down every loaded module and release its library.
    ///
    /// Entries are visited in unspecified order. A module whose library
    /// exported the exit entry point is notified with its own handle before
    /// the library is released; one without it is released silently. The
    /// entry table is empty afterwards, so the method is a no-op when called
    /// a second time.
    pub fn unload_modules(&mut self) {
        for (_, entry) in self.entries.drain() {
            if let Some(exit_hook) = entry.exit_hook {
                unsafe { exit_hook(entry.module.as_ptr()) };
            }
            tracing::debug!(path = %entry.location.display(), "unloaded native service module");
            drop(entry.library);
        }
    }

    /// Whether a module is currently loaded from `location`.
    pub fn is_loaded(&self, location: &Path) -> bool {
        self.entries.contains_key(location)
    }

    /// Locations of all currently loaded modules, in unspecified order.
    pub fn loaded_modules(&self) -> Vec<&Path> {
        self.entries.keys().map(PathBuf::as_path).collect()
    }
}

impl Default for NativeModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// List the candidate module files in `dir`: regular files matching the
/// platform suffix, sorted by filename, case-insensitive, ascending. No
/// recursion into subdirectories.
fn list_candidates(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %dir.display(), %err, "cannot read module directory");
            return Vec::new();
        }
    };

    let suffix = module_suffix();
    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some(suffix))
        .collect();

    candidates.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
    });
    candidates
}
