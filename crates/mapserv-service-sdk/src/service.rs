//! Service contract.

/// A unit of server request-handling functionality contributed by a module.
///
/// Services are identified by an uppercase name (for example `WMS`) and a
/// version string. Request dispatch itself lives with the server's request
/// pipeline, not with this crate.
pub trait Service {
    /// Service name used as the registry key. Lookup is case-insensitive.
    fn name(&self) -> &str;

    /// Service version string.
    fn version(&self) -> &str;
}
