//! helpers for logging.

/// Log to stderr at `default_level` and above.
///
/// `RUST_LOG`, if set, takes precedence over `default_level`.  If called multiple times in the same process, only the
/// first call applies.
pub fn log_to_stderr(default_level: log::LevelFilter) {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        env_logger::builder()
            .filter_level(default_level)
            .parse_default_env()
            .format(|buf, record| {
                use std::io::Write;

                let now = time::OffsetDateTime::now_utc();

                writeln!(
                    buf,
                    "{} {} time={} target={}",
                    record.level(),
                    record.args(),
                    now,
                    record.target()
                )
            })
            .init();
    });
}
