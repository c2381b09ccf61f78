use {
    super::ProbeError,
    crate::source::Probe,
    std::{
        io::{BufRead, BufReader},
        str::FromStr,
    },
};

/// the kernel's aggregate cpu tick counters.
///
/// these are the first eight fields of the `cpu` line in `/proc/stat`,
/// measured in USER_HZ. see `proc_stat(5)` for more information.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CpuTicks {
    /// time spent in user mode.
    pub user: u64,
    /// time spent in user mode with low priority (nice).
    pub nice: u64,
    /// time spent in system mode.
    pub system: u64,
    /// time spent in the idle task.
    pub idle: u64,
    /// time waiting for i/o to complete.
    ///
    /// this value is not reliable and may decrease in certain conditions.
    pub iowait: u64,
    /// time servicing interrupts.
    pub irq: u64,
    /// time servicing softirqs.
    pub softirq: u64,
    /// stolen time, spent in other operating systems when virtualized.
    pub steal: u64,
}

// === impl CpuTicks ===

impl CpuTicks {
    /// reads the aggregate cpu ticks from the given probe.
    ///
    /// only the first line of the statistics source is consulted; the
    /// per-cpu lines that follow it are not needed for an aggregate figure.
    pub fn read(probe: &impl Probe) -> Result<Self, ProbeError> {
        let reader = probe.stat().map(BufReader::new)?;
        let line = reader
            .lines()
            .next()
            .ok_or_else(|| ProbeError::Cpu("empty statistics source".to_owned()))??;

        line.parse()
    }

    /// ticks spent idle, including i/o wait.
    pub fn idle_time(&self) -> u64 {
        let Self { idle, iowait, .. } = *self;

        idle + iowait
    }

    /// ticks spent doing work.
    pub fn non_idle(&self) -> u64 {
        let Self {
            user,
            nice,
            system,
            irq,
            softirq,
            steal,
            ..
        } = *self;

        user + nice + system + irq + softirq + steal
    }

    /// all ticks, idle or not.
    pub fn total(&self) -> u64 {
        self.idle_time() + self.non_idle()
    }
}

impl FromStr for CpuTicks {
    type Err = ProbeError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("cpu") => {}
            other => {
                return Err(ProbeError::Cpu(format!("unexpected label: {other:?}")));
            }
        }

        let mut next = || -> Result<u64, ProbeError> {
            let token = tokens
                .next()
                .ok_or_else(|| ProbeError::Cpu("missing tick counter".to_owned()))?;
            token
                .parse()
                .map_err(|_| ProbeError::Cpu(format!("invalid tick counter: {token}")))
        };

        // any fields past `steal` (guest, guest_nice) are left unread.
        Ok(Self {
            user: next()?,
            nice: next()?,
            system: next()?,
            idle: next()?,
            iowait: next()?,
            irq: next()?,
            softirq: next()?,
            steal: next()?,
        })
    }
}
