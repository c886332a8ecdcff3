use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::{HookConfig, HookError, SlotTable};

thread_local! {
    pub(crate) static HOOKS: RefCell<Hooks> = RefCell::new(Hooks::default());
}

/// Per-thread hook engine state: the slot table, the call-order cursor and
/// the render call-out installed by the driver.
#[derive(Default)]
pub struct Hooks {
    pub slots: SlotTable,
    pub cursor: usize,
    pub(crate) trigger: Option<Rc<dyn Fn()>>,
    pub(crate) record: PassRecord,
    pub(crate) config: HookConfig,
    pub(crate) diagnostic: Option<HookError>,
}

/// Bookkeeping about completed render passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassRecord {
    /// Number of render passes started so far.
    pub passes: u64,
    /// Hooks consumed by the last completed pass.
    pub hook_calls: Option<usize>,
}

/// Order-based state hook.
///
/// The Nth call in a render pass always refers to the Nth slot. `initial` is
/// only stored the first time a slot is reached; afterwards it is ignored and
/// the stored value is returned.
///
/// Calls must be unconditional and happen in the same order on every pass.
/// This isn't checked here: a hook moved into a branch silently reads the
/// slot of whichever hook used to sit at that position.
pub fn use_state<T: Clone + 'static>(initial: T) -> (T, Setter<T>) {
    HOOKS.with(|h| {
        let mut h = h.borrow_mut();
        let index = h.cursor;
        h.cursor += 1;

        let value = match h.slots.try_get::<T>(index) {
            Ok(value) => value,
            Err(HookError::TypeMismatch { .. }) => {
                log::warn!(
                    "use_state: slot {} type changed; replacing. \
                     This usually means a hook was called conditionally.",
                    index
                );
                h.slots.set(index, initial.clone());
                initial
            }
            Err(_) => {
                h.slots.initialize_if_absent(index, initial.clone());
                initial
            }
        };

        (value, Setter::bound(index))
    })
}

/// Writes to the slot it was created for and re-renders.
///
/// The slot index is captured at creation, so a setter kept from an older
/// render pass still targets its original slot.
pub struct Setter<T> {
    index: usize,
    _marker: PhantomData<Rc<T>>,
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Setter<T> {}

impl<T> std::fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Setter").field("index", &self.index).finish()
    }
}

impl<T: 'static> Setter<T> {
    fn bound(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Replaces the slot value, resets the cursor and synchronously runs the
    /// installed render trigger. Returns once that render has completed.
    pub fn set(&self, value: T) {
        HOOKS.with(|h| {
            let mut h = h.borrow_mut();
            h.slots.set(self.index, value);
            h.cursor = 0;
        });
        log::trace!("slot {} written; re-rendering", self.index);
        trigger_render();
    }
}

/// Invokes the installed render trigger, if any.
///
/// The trigger is cloned out first so no borrow of the engine is held while
/// the component runs and calls hooks again.
pub fn trigger_render() {
    match HOOKS.with(|h| h.borrow().trigger.clone()) {
        Some(render) => render(),
        None => log::debug!("no render trigger installed; state change stays pending"),
    }
}

pub fn set_render_trigger(render: impl Fn() + 'static) {
    set_render_trigger_rc(Rc::new(render));
}

pub(crate) fn set_render_trigger_rc(render: Rc<dyn Fn()>) {
    let previous = HOOKS.with(|h| h.borrow_mut().trigger.replace(render));
    drop(previous);
}

pub fn clear_render_trigger() {
    let previous = HOOKS.with(|h| h.borrow_mut().trigger.take());
    drop(previous);
}

pub fn cursor() -> usize {
    HOOKS.with(|h| h.borrow().cursor)
}

pub fn slot_count() -> usize {
    HOOKS.with(|h| h.borrow().slots.len())
}

/// Reads a slot directly, outside of the hook protocol.
pub fn peek_slot<T: Clone + 'static>(index: usize) -> Result<T, HookError> {
    HOOKS.with(|h| h.borrow().slots.try_get::<T>(index))
}

pub fn last_pass() -> PassRecord {
    HOOKS.with(|h| h.borrow().record)
}

/// Takes the most recent hook-order diagnostic, if one was reported.
pub fn take_diagnostic() -> Option<HookError> {
    HOOKS.with(|h| h.borrow_mut().diagnostic.take())
}

/// Drops all slots, the cursor, the render trigger, the pass record and the
/// configuration of the current thread.
pub fn reset() {
    let previous = HOOKS.with(|h| std::mem::take(&mut *h.borrow_mut()));
    // The old trigger may own component closures; drop it with no borrow held.
    drop(previous);
}
