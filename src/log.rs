use log::LevelFilter;

/// Initialize logging for the solver binaries.
///
/// Uses `Debug` level when `debug_enabled` is set, `Info` otherwise.
/// An explicit `RUST_LOG` takes precedence over both, so
/// `RUST_LOG=wordgrid_solver=trace` prints every intermediate grid.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from tests) keeps the first logger.
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
