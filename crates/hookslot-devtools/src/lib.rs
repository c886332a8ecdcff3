use std::cell::RefCell;
use std::rc::Rc;

use web_time::Instant;

use hookslot_core::{cursor, last_pass, slot_count};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    pub pass: u64,
    pub hook_calls: usize,
    pub slots: usize,
    pub render_ms: f32,
}

pub struct Hud {
    render_count: u64,
    render_ms_smooth: f32,
    pub metrics: Option<Metrics>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            render_count: 0,
            render_ms_smooth: 0.0,
            metrics: None,
        }
    }

    pub fn record(&mut self, metrics: Metrics) {
        self.render_count += 1;
        // simple EMA
        let a = 0.2;
        self.render_ms_smooth = if self.render_count == 1 {
            metrics.render_ms
        } else {
            (1.0 - a) * self.render_ms_smooth + a * metrics.render_ms
        };
        self.metrics = Some(metrics);
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("renders: {}", self.render_count)];
        if let Some(m) = &self.metrics {
            lines.push(format!("pass: {}", m.pass));
            lines.push(format!("hooks: {}", m.hook_calls));
            lines.push(format!("slots: {}", m.slots));
            lines.push(format!("render: {:.2} ms", m.render_ms));
            lines.push(format!("avg: {:.2} ms", self.render_ms_smooth));
        }
        lines
    }

    pub fn overlay(&self) -> String {
        self.lines().join("  |  ")
    }
}

pub struct Inspector {
    pub hud: Hud,
    pub enabled: bool,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            hud: Hud::new(),
            enabled: false,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Runs a component body (inside a render pass) and records its metrics.
    pub fn measure<V>(&mut self, component: impl FnOnce() -> V) -> V {
        let start = Instant::now();
        let view = component();
        self.record_pass(start);
        view
    }

    fn record_pass(&mut self, start: Instant) {
        if !self.enabled {
            return;
        }
        self.hud.record(Metrics {
            pass: last_pass().passes,
            hook_calls: cursor(),
            slots: slot_count(),
            render_ms: start.elapsed().as_secs_f32() * 1000.0,
        });
        log::debug!("{}", self.hud.overlay());
    }
}

/// Wraps a component so every render is measured by `inspector`.
pub fn instrument<V: 'static>(
    inspector: Rc<RefCell<Inspector>>,
    component: impl Fn() -> V + 'static,
) -> impl Fn() -> V + 'static {
    move || {
        let start = Instant::now();
        // Not borrowed across `component`, which may render nested roots.
        let view = component();
        inspector.borrow_mut().record_pass(start);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookslot_core::{mount, render_pass, reset, use_state};

    #[test]
    fn test_hud_lines() {
        let mut hud = Hud::new();
        assert_eq!(hud.lines(), vec!["renders: 0".to_string()]);

        hud.record(Metrics {
            pass: 3,
            hook_calls: 2,
            slots: 2,
            render_ms: 1.5,
        });
        let lines = hud.lines();
        assert_eq!(lines[0], "renders: 1");
        assert_eq!(lines[1], "pass: 3");
        assert_eq!(lines[2], "hooks: 2");
        assert_eq!(lines[4], "render: 1.50 ms");
    }

    #[test]
    fn test_measure_disabled_records_nothing() {
        reset();
        let mut inspector = Inspector::new();
        let value = render_pass(|| inspector.measure(|| use_state(4i32).0));
        assert_eq!(value, 4);
        assert_eq!(inspector.hud.render_count(), 0);
    }

    #[test]
    fn test_instrumented_root_records_passes() {
        reset();
        let inspector = Rc::new(RefCell::new(Inspector::new()));
        inspector.borrow_mut().toggle();

        let root = mount(
            instrument(inspector.clone(), || {
                let (a, _) = use_state(1i32);
                let (b, _) = use_state(2i32);
                a + b
            }),
            |sum| assert_eq!(sum, 3),
        );
        root.render();

        let inspector = inspector.borrow();
        assert_eq!(inspector.hud.render_count(), 2);
        let metrics = inspector.hud.metrics.as_ref().expect("metrics recorded");
        assert_eq!(metrics.pass, 2);
        assert_eq!(metrics.hook_calls, 2);
        assert_eq!(metrics.slots, 2);
    }
}
