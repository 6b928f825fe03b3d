//! 回放宿主的日志初始化
//!
//! 文件日志按天滚动写入 `<数据目录>/logs/slotmark.log`；级别由 `RUST_LOG` 控制。
//! 错误级别的事件同时写到 stderr，方便脚本调用方直接看到。

use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use slotmark::kernel::services::adapters::ensure_log_dir;

const LOG_FILE_PREFIX: &str = "slotmark.log";
const DEFAULT_FILTER: &str = "slotmark=info";

pub struct LoggingGuard {
    _file_worker: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// `None` when there is no writable log directory or a subscriber is already set.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = match ensure_log_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("logging disabled: {e}");
            return None;
        }
    };

    let (file_writer, file_worker) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(%location, "replay panicked: {info}");
    }));

    Some(LoggingGuard {
        _file_worker: file_worker,
        log_dir,
    })
}
