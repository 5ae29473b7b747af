use super::perf_stats::TickStats;

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn stamp() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn stamp() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn ms_since(start: &Stamp) -> f64 {
    js_sys::Date::now() - start
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_since(start: &Stamp) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Wall-clock duration of one tick. Only exists while perf metrics are on,
/// so a disabled scene never touches the clock.
pub(crate) struct TickTimer {
    started: Stamp,
}

impl TickTimer {
    pub(crate) fn start(perf_on: bool) -> Option<Self> {
        perf_on.then(|| TickTimer { started: stamp() })
    }

    /// Store the elapsed time as `tick_ms`
    pub(crate) fn finish(self, stats: &mut TickStats) {
        stats.tick_ms = ms_since(&self.started);
    }
}
