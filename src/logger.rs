// Logging setup
//
// Console logging through env_logger. RUST_LOG overrides the default `info` level.

use log::LevelFilter;
use std::io::Write;

pub fn init() {
    let mut builder = env_logger::Builder::new();

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(LevelFilter::Info);
    }

    // [HH:MM:SS LEVEL] target - message
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {}] {} - {}",
            chrono::Local::now().format("%H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // A second init (tests, embedding) keeps the first logger
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
