pub use crate::config::{HookConfig, config, configure};
pub use crate::driver::{RenderPass, Root, mount, render_pass};
pub use crate::error::HookError;
pub use crate::runtime::{
    PassRecord, Setter, clear_render_trigger, last_pass, peek_slot, set_render_trigger,
    take_diagnostic, trigger_render, use_state,
};
