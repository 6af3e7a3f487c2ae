use log::{debug, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Environment variable holding the `env_logger` filter directives.
pub const LOG_FILTER_ENV: &str = "DOGS_LOG";

/// Used when `DOGS_LOG` is unset: our crate at debug, chatty dependencies at warn.
pub const DEFAULT_LOG_FILTER: &str = "info,dogs_lib=debug,diesel=warn,reqwest=warn,hyper=warn,tokio=warn";

/// Install the `log` and `tracing` backends. Safe to call more than once.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(
            env_logger::Env::default().filter_or(LOG_FILTER_ENV, DEFAULT_LOG_FILTER),
        )
        .format_timestamp_secs()
        .format_target(false)
        .format_module_path(false)
        .init();

        // Catalog client events go through `tracing`; env_logger owns the
        // `log` facade, so no LogTracer bridge is installed.
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            debug!("tracing subscriber already installed");
        }

        info!("Logging initialized ({}={})", LOG_FILTER_ENV, DEFAULT_LOG_FILTER);
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// One-line log formats shared by the store, the catalog client and the
/// aggregator. `None` timings mark the start of a step.
pub struct LogContext;

impl LogContext {
    pub fn store_query(query: &str, rows: Option<usize>, elapsed_ms: Option<u64>) {
        match (rows, elapsed_ms) {
            (Some(rows), Some(ms)) => info!("Store: {} -> {} rows in {}ms", query, rows, ms),
            (Some(rows), None) => info!("Store: {} -> {} rows", query, rows),
            _ => debug!("Store: {}", query),
        }
    }

    pub fn catalog_request(url: &str, status: Option<u16>, elapsed_ms: Option<u64>) {
        match (status, elapsed_ms) {
            (Some(status), Some(ms)) => info!("Catalog: GET {} -> {} in {}ms", url, status, ms),
            (Some(status), None) => info!("Catalog: GET {} -> {}", url, status),
            _ => debug!("Catalog: GET {}", url),
        }
    }

    /// `source` is the provenance tag of the side being searched.
    pub fn breed_search(query: &str, source: &str, matches: Option<usize>) {
        match matches {
            Some(n) => info!("Search: '{}' in {} matched {}", query, source, n),
            None => debug!("Search: '{}' in {}", query, source),
        }
    }

    pub fn slow_connection(elapsed_ms: u64) {
        crate::log_warn!("Store: connection checkout took {}ms", elapsed_ms);
    }

    pub fn operation_failed(operation: &str, error: &dyn std::error::Error) {
        crate::log_error!("{} failed: {}", operation, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_idempotent() {
        init_logger();
        init_logger();
        LogContext::breed_search("akita", "API", Some(1));
    }

    #[test]
    fn test_default_filter_keeps_crate_at_debug() {
        assert!(DEFAULT_LOG_FILTER.contains("dogs_lib=debug"));
        assert!(DEFAULT_LOG_FILTER.starts_with("info"));
    }
}
