use {
    crate::probe::{Counters, CpuTicks},
    std::collections::BTreeMap,
};

/// the loopback interface, excluded from aggregate rates.
const LOOPBACK: &str = "lo";

/// derives rates from consecutive counter samples.
///
/// a sentinel holds the previous sample for each tracked counter. one
/// sentinel lives for the process lifetime and is fed once per poll cycle,
/// strictly sequentially.
#[derive(Debug, Default)]
pub struct Sentinel {
    /// the last observed cpu totals, once a sample has been fed.
    cpu: Option<CpuTotals>,
    /// the last observed per-interface byte counters.
    interfaces: BTreeMap<String, Counters>,
}

/// idle and overall tick sums from one cpu sample.
#[derive(Clone, Copy, Debug)]
struct CpuTotals {
    total: u64,
    idle: u64,
}

/// aggregate transfer rates over one poll interval, in bytes per second.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NetRate {
    pub rx: u64,
    pub tx: u64,
}

// === impl Sentinel ===

impl Sentinel {
    /// creates a sentinel with no prior samples.
    pub fn new() -> Self {
        Self::default()
    }

    /// seeds the interface counters without deriving a rate.
    ///
    /// used for the priming read at startup, so the first rendered frame
    /// measures a real interval instead of reporting bytes-since-boot.
    pub fn prime(&mut self, interfaces: BTreeMap<String, Counters>) {
        self.interfaces = interfaces;
    }

    /// feeds a cpu sample, returning the usage percentage since the last.
    ///
    /// the very first call has nothing to compare against: it stores the
    /// sample and reports 0.0, a valid cold-start reading. a zero total
    /// delta also reads as 0.0. in every case the stored totals are
    /// replaced with the current sample's.
    ///
    /// tick counters are assumed monotonic within a session. a counter
    /// reset below the previous sample wraps into a bogus delta for one
    /// cycle; this is a known limitation, left unclamped.
    pub fn cpu_percent(&mut self, ticks: &CpuTicks) -> f64 {
        let (total, idle) = (ticks.total(), ticks.idle_time());
        let prev = self.cpu.replace(CpuTotals { total, idle });

        let Some(CpuTotals {
            total: prev_total,
            idle: prev_idle,
        }) = prev
        else {
            return 0.0;
        };

        let total_delta = total.wrapping_sub(prev_total);
        let idle_delta = idle.wrapping_sub(prev_idle);

        if total_delta == 0 {
            return 0.0;
        }

        100.0 * total_delta.wrapping_sub(idle_delta) as f64 / total_delta as f64
    }

    /// feeds an interface sample, returning aggregate rates for the interval.
    ///
    /// an interface unseen in the previous poll baselines at zero, so a new
    /// interface contributes its full counters. a counter that decreased
    /// (wraparound, interface reset) contributes zero rather than
    /// underflowing. the stored map is wholly replaced afterwards, dropping
    /// interfaces that disappeared.
    pub fn net_rate(&mut self, interfaces: BTreeMap<String, Counters>, elapsed: f64) -> NetRate {
        let (mut rx_delta, mut tx_delta) = (0u64, 0u64);

        for (name, current) in &interfaces {
            if name == LOOPBACK {
                continue;
            }

            let previous = self.interfaces.get(name).copied().unwrap_or_default();
            rx_delta += current.rx.saturating_sub(previous.rx);
            tx_delta += current.tx.saturating_sub(previous.tx);
        }

        self.interfaces = interfaces;

        let scale = |delta: u64| -> u64 {
            if elapsed > 0.0 {
                (delta as f64 / elapsed).round() as u64
            } else {
                delta
            }
        };

        NetRate {
            rx: scale(rx_delta),
            tx: scale(tx_delta),
        }
    }
}
