use std::time::Instant;

/// Runs a load or export stage inline on the UI thread, inside a span named
/// after the stage.
pub fn run_blocking<F, T>(stage: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let span = tracing::info_span!("stage", name = stage);
    let _entered = span.enter();
    let started = Instant::now();
    let result = f();
    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "stage finished"
    );
    result
}
