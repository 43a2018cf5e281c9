/// Lap timer for the step phases.
///
/// `lap()` returns the milliseconds since the previous lap (or since `start`)
/// and restarts the lap, so consecutive phases can be timed with one timer.
pub(crate) struct PerfTimer {
    origin_ms: f64,
    lap_ms: f64,
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer { origin_ms: now, lap_ms: now }
    }

    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        let elapsed = now - self.lap_ms;
        self.lap_ms = now;
        elapsed
    }

    pub(crate) fn total_ms(&self) -> f64 {
        now_ms() - self.origin_ms
    }
}
