use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{anyhow, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Writes every byte to both sinks
pub struct Tee<A: Write, B: Write> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// `timestamp - LEVEL - message`
pub fn format_line(timestamp: &str, level: log::Level, message: &std::fmt::Arguments<'_>) -> String {
    format!("{} - {} - {}", timestamp, level, message)
}

/// Sends log output to stdout and appends it to `log_file`.
///
/// Level defaults to `level`; a `RUST_LOG` value overrides it.
pub fn init_logging(log_file: &Path, level: LevelFilter) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| anyhow!("Failed to open log file '{}': {}", log_file.display(), e))?;

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            writeln!(buf, "{}", format_line(&timestamp, record.level(), record.args()))
        })
        .target(Target::Pipe(Box::new(Tee::new(io::stdout(), file))));

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))
}
