use serde::Serialize;
use std::time::Instant;

/// Startup instant, put in managed state at launch.
pub struct BootTime(pub Instant);

impl BootTime {
    pub fn now() -> Self {
        BootTime(Instant::now())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

pub fn report(boot: &BootTime) -> HealthReport {
    HealthReport {
        status: "ok",
        service: "campaign-creative",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: boot.0.elapsed().as_secs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_ok_with_version() {
        let r = report(&BootTime::now());
        assert_eq!(r.status, "ok");
        assert_eq!(r.version, env!("CARGO_PKG_VERSION"));
        assert!(r.uptime_secs < 5);
    }
}
