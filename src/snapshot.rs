use {
    crate::{
        probe::{CpuTicks, MemInfo, disk, host, net, thermal, uptime},
        sentinel::{NetRate, Sentinel},
        source::Probe,
    },
    tracing::debug,
};

/// the filesystem whose usage is reported.
const DISK_PATH: &str = "/";

/// one cycle's metrics.
///
/// built once per poll, handed to presentation, and discarded. percentages
/// are `None` when their counter source was unavailable this cycle.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// cpu usage since the previous cycle, as a percentage.
    pub cpu: Option<f64>,
    /// memory in use, as a percentage.
    pub ram: Option<f64>,
    /// root filesystem usage, as a percentage.
    pub disk: Option<f64>,
    /// seconds since boot.
    pub uptime: f64,
    /// cpu temperature, in celsius.
    pub temperature: Option<f64>,
    /// the system hostname.
    pub hostname: String,
    /// the current user's name.
    pub username: String,
    /// aggregate transfer rates over the poll interval.
    pub net: NetRate,
}

// === impl Snapshot ===

impl Snapshot {
    /// collects one cycle's metrics.
    ///
    /// pure composition: every reader and the rate engine are invoked once,
    /// and each metric's availability is decided independently. a failed
    /// read logs at debug and leaves its field unset, without disturbing
    /// the other metrics or the poll loop.
    pub fn collect(probe: &impl Probe, sentinel: &mut Sentinel, elapsed: f64) -> Self {
        let cpu = match CpuTicks::read(probe) {
            Ok(ticks) => Some(sentinel.cpu_percent(&ticks)),
            Err(error) => {
                debug!(%error, "cpu statistics unavailable");
                None
            }
        };

        let ram = match MemInfo::read(probe) {
            Ok(mem) => Some(mem.percent()),
            Err(error) => {
                debug!(%error, "memory figures unavailable");
                None
            }
        };

        let disk = match disk::usage(probe, DISK_PATH) {
            Ok(percent) => Some(percent),
            Err(error) => {
                debug!(%error, "filesystem statistics unavailable");
                None
            }
        };

        let uptime = uptime::read(probe);
        let temperature = thermal::read(probe);

        let hostname = probe.hostname().unwrap_or_else(|| host::UNKNOWN.to_owned());
        let username = probe.username().unwrap_or_else(|| host::UNKNOWN.to_owned());

        let net = sentinel.net_rate(net::read(probe), elapsed);

        Self {
            cpu,
            ram,
            disk,
            uptime,
            temperature,
            hostname,
            username,
            net,
        }
    }
}
