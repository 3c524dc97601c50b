use simplelog::{Config, LevelFilter, TestLogger};

pub(crate) mod quick;

/// Routes `log` output through the test harness so it shows up for failing tests.
pub(crate) fn init_logging() {
    // Only the first call in a test binary can install the logger.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
