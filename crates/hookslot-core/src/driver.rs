use std::cell::RefCell;
use std::rc::Rc;

use crate::HookError;
use crate::runtime::{HOOKS, clear_render_trigger, set_render_trigger_rc};

/// Scope of one invocation of the root component.
///
/// Beginning a pass resets the cursor so the first hook gets slot 0. Dropping
/// it records how many hooks the pass consumed and, if enabled, compares that
/// with the previous pass.
pub struct RenderPass {
    number: u64,
}

impl RenderPass {
    pub fn begin() -> Self {
        let number = HOOKS.with(|h| {
            let mut h = h.borrow_mut();
            h.cursor = 0;
            h.record.passes += 1;
            h.record.passes
        });
        log::trace!("render pass {number} started");
        RenderPass { number }
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl Drop for RenderPass {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }

        let mismatch = HOOKS.with(|h| {
            let mut h = h.borrow_mut();
            let current = h.cursor;
            let previous = h.record.hook_calls.replace(current);

            if !h.config.check_hook_order {
                return None;
            }
            match previous {
                Some(previous) if previous != current => {
                    let err = HookError::HookCountMismatch { previous, current };
                    h.diagnostic = Some(err.clone());
                    Some((err, h.config.strict))
                }
                _ => None,
            }
        });

        if let Some((err, strict)) = mismatch {
            if strict {
                panic!("render pass {}: {err}", self.number);
            }
            log::warn!("render pass {}: {err}", self.number);
        }
    }
}

/// Runs `f` inside a fresh [`RenderPass`].
pub fn render_pass<R>(f: impl FnOnce() -> R) -> R {
    let _pass = RenderPass::begin();
    f()
}

/// A mounted root component.
pub struct Root {
    render: Rc<dyn Fn()>,
}

impl Root {
    /// Re-renders the root outside of any state change.
    pub fn render(&self) {
        (self.render)()
    }

    /// Removes this root's render trigger, if it is still the installed one.
    pub fn unmount(self) {
        let installed = HOOKS.with(|h| {
            h.borrow()
                .trigger
                .as_ref()
                .is_some_and(|t| Rc::ptr_eq(t, &self.render))
        });
        if installed {
            clear_render_trigger();
        }
    }
}

/// Installs `component` as the root: every render runs it in a fresh pass and
/// hands the produced view to `present`. Performs the first render before
/// returning.
pub fn mount<V: 'static>(
    component: impl Fn() -> V + 'static,
    present: impl FnMut(V) + 'static,
) -> Root {
    let present = RefCell::new(present);
    let render: Rc<dyn Fn()> = Rc::new(move || {
        let view = render_pass(&component);
        match present.try_borrow_mut() {
            Ok(mut present) => present(view),
            // A setter called from inside `present` re-enters here.
            Err(_) => log::warn!("mount: present re-entered by a state change; view dropped"),
        }
    });

    set_render_trigger_rc(render.clone());
    log::debug!("root mounted");
    render();

    Root { render }
}
