use std::path::Path;
use std::sync::Once;

use tracing_appender::non_blocking::WorkerGuard;

static INIT: Once = Once::new();

/// Install a JSON subscriber writing to `<log_dir>/morsencode-trace.jsonl`.
///
/// Keep the returned guard alive until exit; dropping it flushes the log.
pub fn init_tracing(log_dir: &Path) -> Option<WorkerGuard> {
    let mut guard = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "morsencode-trace.jsonl");
        let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "morse_core=debug,morse_stream=debug,morse_cli=debug",
                    )
                }),
            )
            .init();
    });
    guard
}
