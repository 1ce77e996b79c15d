//! Export macro for service module crates.

/// Emit the init/exit entry points for a service module `cdylib`.
///
/// The constructor is a plain `fn() -> Option<Module>`; returning `None`
/// makes the init entry point hand a null handle to the host, which the
/// host treats as an initialization failure. The exit entry point reclaims
/// and drops the handle; hosts call it at most once, during shutdown.
///
/// A crate can declare exactly one module: both entry points carry fixed,
/// unmangled export names.
///
/// # Example
///
/// ```rust
/// use mapserv_service_sdk::prelude::*;
///
/// #[derive(Default)]
/// struct MyModule;
///
/// impl ServiceModule for MyModule {
///     fn register_self(&mut self, _registry: &mut ServiceRegistry, _server: &dyn ServerInterface) {}
/// }
///
/// fn create_module() -> Option<MyModule> {
///     Some(MyModule)
/// }
///
/// declare_service_module!(MyModule, create_module);
/// ```
#[macro_export]
macro_rules! declare_service_module {
    ($module:ty, $ctor:expr) => {
        #[no_mangle]
        pub extern "C" fn mapserv_service_module_init() -> *mut $crate::ServiceModuleHandle {
            let ctor: fn() -> ::core::option::Option<$module> = $ctor;
            match ctor() {
                ::core::option::Option::Some(module) => {
                    $crate::ServiceModuleHandle::new(::std::boxed::Box::new(module)).into_raw()
                }
                ::core::option::Option::None => ::core::ptr::null_mut(),
            }
        }

        /// # Safety
        ///
        /// `handle` must be the pointer produced by
        /// `mapserv_service_module_init`, passed at most once.
        #[no_mangle]
        pub unsafe extern "C" fn mapserv_service_module_exit(
            handle: *mut $crate::ServiceModuleHandle,
        ) {
            if !handle.is_null() {
                drop(unsafe { $crate::ServiceModuleHandle::from_raw(handle) });
            }
        }
    };
}
