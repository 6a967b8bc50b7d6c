//! Opt-in JSON trace output (`trace` feature).
//!
//! Rule compilation runs once per table inside the `compile_romaji` and
//! `compile_kana` spans; conversions run inside `to_romaji`, `to_kana` and
//! `match` spans on every call. By default only the compile spans are kept,
//! each written once on close with its busy/idle time. Set `RUST_LOG` to
//! `kana_engine=debug` to record the per-call spans too.

use std::path::{Path, PathBuf};

pub const TRACE_FILE: &str = "kana-engine-trace.jsonl";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "kana_engine=info,kana_engine::rules=debug";

#[cfg(feature = "trace")]
static INIT: std::sync::Once = std::sync::Once::new();

/// Install the JSON subscriber writing to `log_dir/kana-engine-trace.jsonl`
/// and return that path. Later calls only return the path.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> PathBuf {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // keep the writer alive until exit

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            // registries compile on whichever thread asks first
            .with_thread_ids(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
            )
            .init();
    });
    log_dir.join(TRACE_FILE)
}

/// Without the `trace` feature nothing is installed and no file is written.
#[cfg(not(feature = "trace"))]
pub fn init_tracing(log_dir: &Path) -> PathBuf {
    log_dir.join(TRACE_FILE)
}
