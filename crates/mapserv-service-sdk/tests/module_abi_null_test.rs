//! A constructor returning `None` must surface as a null init handle.

use mapserv_service_sdk::prelude::*;

struct NeverModule;

impl ServiceModule for NeverModule {
    fn register_self(&mut self, _registry: &mut ServiceRegistry, _server: &dyn ServerInterface) {
        unreachable!("module is never constructed");
    }
}

fn create_module() -> Option<NeverModule> {
    None
}

declare_service_module!(NeverModule, create_module);

#[test]
fn failed_constructor_yields_null_handle() {
    assert!(mapserv_service_module_init().is_null());
}
