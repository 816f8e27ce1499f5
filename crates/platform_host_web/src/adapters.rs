use std::rc::Rc;

use platform_host::{HostServices, HostStrategy};

/// Returns the host strategy for the active build target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host service bundle for the active target.
///
/// Browser builds get `localStorage`, object-URL previews, and `setTimeout` delays; native builds
/// get in-memory adapters.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            session: Rc::new(crate::WebSessionStore),
            media_previews: Rc::new(crate::WebMediaPreviewService),
            timer: Rc::new(crate::WebTimer),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices::headless(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_build_selects_headless_services() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert_eq!(host_strategy_name(), "headless");
    }
}
