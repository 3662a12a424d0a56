use anyhow::anyhow;
use anyhow::Result;
use log::LevelFilter;
use std::io::Write;
use std::time::Instant;

/// Maps number of `-v` flags to log level
pub fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs logger printing to stderr. Stdout is reserved for the report.
pub fn init(verbosity: u8) -> Result<()> {
    let max_level = level(verbosity);
    log::set_boxed_logger(Box::new(StderrLogger {
        start: Instant::now(),
        max_level,
    }))
    .map_err(|_| anyhow!("Failed to set logger"))?;
    log::set_max_level(max_level);
    Ok(())
}

struct StderrLogger {
    start: Instant,
    max_level: LevelFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            // Nowhere to report failure of writing to stderr
            let _ = writeln!(
                std::io::stderr().lock(),
                "{:0.3}: {} - {}",
                self.start.elapsed().as_secs_f32(),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), LevelFilter::Warn);
        assert_eq!(level(1), LevelFilter::Info);
        assert_eq!(level(2), LevelFilter::Debug);
        assert_eq!(level(3), LevelFilter::Trace);
        assert_eq!(level(200), LevelFilter::Trace);
    }
}
