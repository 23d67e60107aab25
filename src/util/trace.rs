/// Emits a `tracing` event describing a structural change, but only in test builds. Release
/// builds of the collections never log.
macro_rules! test_trace {
    ($($tt:tt)*) => {
        #[cfg(test)]
        tracing::trace!($($tt)*)
    }
}

/// Installs a fmt subscriber that writes through the test harness, returning the guard that keeps
/// it active for the current test.
#[cfg(test)]
pub(crate) fn trace_init() -> tracing::dispatcher::DefaultGuard {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .without_time()
        .set_default()
}
