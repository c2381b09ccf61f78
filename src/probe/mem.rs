use {
    super::ProbeError,
    crate::source::Probe,
    std::io::{BufRead, BufReader},
};

/// total and available memory, in kilobytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MemInfo {
    pub total_kb: u64,
    pub available_kb: u64,
}

// === impl MemInfo ===

impl MemInfo {
    /// reads memory figures from the given probe.
    ///
    /// entries are scanned until both keys are found or input ends. a
    /// source that never reports `MemAvailable` leaves it at zero, which
    /// reads as fully-used memory.
    pub fn read(probe: &impl Probe) -> Result<Self, ProbeError> {
        let reader = probe.meminfo().map(BufReader::new)?;

        let (mut total_kb, mut available_kb) = (0u64, 0u64);
        for line in reader.lines() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let (Some(key), Some(value)) = (tokens.next(), tokens.next()) else {
                continue;
            };
            let Ok(value) = value.parse::<u64>() else {
                continue;
            };

            match key {
                "MemTotal:" => total_kb = value,
                "MemAvailable:" => {
                    available_kb = value;
                    break;
                }
                _ => {}
            }
        }

        if total_kb == 0 {
            return Err(ProbeError::ZeroTotalMemory);
        }

        Ok(Self {
            total_kb,
            available_kb,
        })
    }

    /// the percentage of memory in use.
    pub fn percent(&self) -> f64 {
        let Self {
            total_kb,
            available_kb,
        } = *self;

        let used_kb = total_kb.saturating_sub(available_kb);
        used_kb as f64 * 100.0 / total_kb as f64
    }
}
