//! Load every native service module from a directory, list the registered
//! services, then unload.
//!
//! ```text
//! cargo run --example load_modules -- /srv/mapserv/modules
//! # or: MAPSERV_MODULES_DIR=/srv/mapserv/modules cargo run --example load_modules
//! ```

use mapserv_server::{NativeModuleLoader, ServerSettings};
use mapserv_service_sdk::ServiceRegistry;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut settings = ServerSettings::from_env();
    if let Some(dir) = std::env::args().nth(1) {
        settings = settings.with_modules_dir(dir);
    }
    let Some(dir) = settings.modules_dir().map(|dir| dir.to_path_buf()) else {
        tracing::error!("no module directory given; pass one or set MAPSERV_MODULES_DIR");
        std::process::exit(1);
    };

    let mut registry = ServiceRegistry::new();
    let mut loader = NativeModuleLoader::new();
    loader.load_modules(&dir, &mut registry, &settings);

    tracing::info!(
        modules = loader.loaded_modules().len(),
        services = registry.len(),
        "scan complete"
    );

    loader.unload_modules();
}
