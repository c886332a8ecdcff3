//! # Hooks and render passes
//!
//! Hookslot lets a plain function keep state across calls. The function is
//! re-run on every render; what survives between runs lives in a per-thread
//! slot table that is indexed by call order.
//!
//! - `use_state` — returns the current value of the next slot and a `Setter`.
//! - `Setter::set` — writes the slot and synchronously re-renders.
//! - `mount` / `RenderPass` — the driver side: runs the root component with
//!   the cursor reset to zero.
//!
//! ## State
//!
//! ```rust
//! use hookslot_core::*;
//!
//! fn counter() -> String {
//!     let (count, set_count) = use_state(0);
//!     let (step, _set_step) = use_state(1);
//!     # let _ = set_count;
//!     format!("count = {count}, step = {step}")
//! }
//!
//! let root = mount(counter, |view| println!("{view}"));
//! assert_eq!(peek_slot::<i32>(0), Ok(0));
//! # root.unmount();
//! ```
//!
//! - Slots are order-based: the Nth `use_state` call in a pass always refers
//!   to the Nth stored value. The initial value is used once, when the slot is
//!   first reached.
//! - Hooks must not be called inside branches or loops. Nothing stops you at
//!   runtime; the slots just end up belonging to the wrong call sites. In
//!   debug builds the hook count of consecutive passes is compared and a
//!   mismatch is logged (see `HookConfig`).
//!
//! ## Setters
//!
//! A `Setter` is bound to the slot index it was created for. Calling it
//! writes the new value, resets the cursor and runs the installed render
//! trigger before returning. There is no batching: every call is a full
//! re-render.
//!
//! ```rust
//! use hookslot_core::*;
//!
//! let setter = std::rc::Rc::new(std::cell::Cell::new(None));
//! let root = mount(
//!     {
//!         let setter = setter.clone();
//!         move || {
//!             let (count, set_count) = use_state(0);
//!             setter.set(Some(set_count));
//!             count
//!         }
//!     },
//!     |count| log::info!("count = {count}"),
//! );
//!
//! setter.get().unwrap().set(5);
//! assert_eq!(peek_slot::<i32>(0), Ok(5));
//! # root.unmount();
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod prelude;
pub mod runtime;
pub mod slots;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use runtime::*;
pub use slots::*;
