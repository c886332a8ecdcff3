use crate::runtime::HOOKS;

/// Runtime switches for the hook engine of the current thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HookConfig {
    /// Compare the hook count of each render pass with the previous one.
    pub check_hook_order: bool,
    /// Panic on a hook count mismatch instead of logging it.
    pub strict: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            check_hook_order: cfg!(debug_assertions),
            strict: cfg!(feature = "strict-hooks"),
        }
    }
}

pub fn configure(config: HookConfig) {
    HOOKS.with(|h| h.borrow_mut().config = config);
}

pub fn config() -> HookConfig {
    HOOKS.with(|h| h.borrow().config)
}
