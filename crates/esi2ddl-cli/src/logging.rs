use env_logger::Env;

/// Initializes the logger. The level is `info`, or `debug` when verbose;
/// `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    if env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init()
        .is_err()
    {
        log::warn!("Unable to initialize logging -- has it already been initialized?")
    }
}
