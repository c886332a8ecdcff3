#![allow(non_snake_case)]
//! Counter demo: one root component, two pieces of state, scripted clicks.
//!
//! Run with `RUST_LOG=debug` to see render pass metrics.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use hookslot_core::prelude::*;
use hookslot_devtools::{Inspector, instrument};

#[derive(Clone)]
enum View {
    Text(String),
    Button {
        label: String,
        on_click: Rc<dyn Fn()>,
    },
    Column(Vec<View>),
}

fn Text(text: impl Into<String>) -> View {
    View::Text(text.into())
}

fn Button(label: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::Button {
        label: label.into(),
        on_click: Rc::new(on_click),
    }
}

fn Column(children: Vec<View>) -> View {
    View::Column(children)
}

impl View {
    fn find_button(&self, wanted: &str) -> Option<Rc<dyn Fn()>> {
        match self {
            View::Button { label, on_click } if label == wanted => Some(on_click.clone()),
            View::Column(children) => children.iter().find_map(|c| c.find_button(wanted)),
            _ => None,
        }
    }

    fn paint(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self {
            View::Text(text) => {
                let _ = writeln!(out, "{indent}{text}");
            }
            View::Button { label, .. } => {
                let _ = writeln!(out, "{indent}[ {label} ]");
            }
            View::Column(children) => {
                for child in children {
                    child.paint(depth + 1, out);
                }
            }
        }
    }
}

fn app() -> View {
    let (count, set_count) = use_state(0i32);
    let (step, set_step) = use_state(1i32);

    Column(vec![
        Text(format!("Count: {count}")),
        Text(format!("Step: {step}")),
        Button("Increment", move || set_count.set(count + step)),
        Button("Decrement", move || set_count.set(count - step)),
        Button("Step x2", move || set_step.set(step * 2)),
    ])
}

fn click(screen: &RefCell<Option<View>>, label: &str) -> anyhow::Result<()> {
    // Clone the handler out: clicking re-renders, which replaces `screen`.
    let on_click = screen
        .borrow()
        .as_ref()
        .and_then(|view| view.find_button(label))
        .ok_or_else(|| anyhow::anyhow!("no button labelled {label:?} on screen"))?;
    log::info!("click: {label}");
    on_click();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let inspector = Rc::new(RefCell::new(Inspector::new()));
    if log::log_enabled!(log::Level::Debug) {
        inspector.borrow_mut().toggle();
    }

    let screen = Rc::new(RefCell::new(None));
    let root = mount(instrument(inspector.clone(), app), {
        let screen = screen.clone();
        move |view: View| {
            let mut out = String::new();
            view.paint(0, &mut out);
            print!("{out}");
            println!("--");
            *screen.borrow_mut() = Some(view);
        }
    });

    for label in ["Increment", "Increment", "Step x2", "Increment", "Decrement"] {
        click(&screen, label)?;
    }

    if let Some(HookError::HookCountMismatch { previous, current }) = take_diagnostic() {
        anyhow::bail!("hook count changed from {previous} to {current}");
    }

    println!("{}", inspector.borrow().hud.overlay());
    root.unmount();
    Ok(())
}
