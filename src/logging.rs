//! Diagnostic logging through the `log` facade.

use log::LevelFilter;

/// Initialise env_logger once. `RUST_LOG` wins when set; otherwise only
/// warnings, or debug output with `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    // try_init: a second call (tests, embedding) is not an error
    let _ = builder.format_timestamp(None).try_init();
}
