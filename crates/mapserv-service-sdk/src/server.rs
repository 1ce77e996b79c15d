//! Server context handed to modules.

/// Opaque server context passed through unmodified to each module's
/// self-registration call.
///
/// The loader never inspects this value; it exists so modules can query the
/// hosting server while registering their services.
pub trait ServerInterface {
    /// Version string of the hosting server.
    fn version(&self) -> &str;

    /// Look up a host configuration value by key.
    fn config_value(&self, key: &str) -> Option<String> {
        let _ = key;
        None
    }
}
