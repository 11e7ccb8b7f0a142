use std::io::Write;

use chrono::Local;
use env_logger::Target;

/// Installs the stderr logger used by the binary.
///
/// The filter level is fixed in code; standard output stays reserved for
/// the generated sequence.
pub fn configure_logger() {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} [{}] {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter(None, log::LevelFilter::Warn)
        .target(Target::Stderr)
        .init();
}
