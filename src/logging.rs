use env_logger::Env;
use log::LevelFilter;

/// Wires the `-v` count to the log level: 0=warn, 1=info, 2=debug, 3+=trace.
///
/// `RUST_LOG` takes precedence when set, so `RUST_LOG=aurum=trace` works
/// regardless of flags.
pub fn setup_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(format!("aurum={level}")))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}
