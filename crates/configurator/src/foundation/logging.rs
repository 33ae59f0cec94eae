//! Logging setup shared by configurator binaries

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system with `RUST_LOG` and the default `Info` level
pub fn init() {
    init_with_level(log::LevelFilter::Info);
}

/// Initialize the logging system with an explicit fallback level
///
/// `RUST_LOG` still takes precedence when set. Calling this twice is harmless;
/// the second initialization is ignored.
pub fn init_with_level(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A logger may already be installed by a test harness
    let _ = builder.try_init();
}
