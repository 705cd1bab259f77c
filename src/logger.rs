use log::LevelFilter;

/// Route `log` output to stderr; `RUST_LOG` can still refine per module.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
