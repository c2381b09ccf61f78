//! a compact system monitor.
//!
//! samples cpu, memory, disk, network, temperature, uptime, and host
//! identity once per second and renders them as a live text dashboard.
//! [`Snapshot`] carries one cycle's readings; [`Sentinel`] turns the
//! kernel's monotonic counters into rates between cycles.

use {
    crate::{
        source::{Clock, SystemClock},
        window::Window,
    },
    std::{io, time::Duration},
    tracing::info,
};

pub use crate::{
    probe::ProbeError,
    sentinel::{NetRate, Sentinel},
    snapshot::Snapshot,
    source::{Probe, ProcFs},
};

/// display helpers for byte counts and durations.
pub mod fmt;

/// counter readers.
///
/// this module provides readers over `/proc/stat`, `/proc/meminfo`,
/// `/proc/net/dev`, and friends.
pub mod probe;

/// the delta/rate engine.
pub mod sentinel;

/// the per-cycle snapshot record and its builder.
pub mod snapshot;

/// abstractions over counter sources and clocks.
pub mod source;

mod meter;
mod window;

pub struct App {
    sentinel: Sentinel,
    probe: ProcFs,
    clock: SystemClock,
}

/// === impl App ===

impl App {
    /// the fixed poll period.
    const INTERVAL: Duration = Duration::from_secs(1);

    /// the delay between the priming read and the first frame.
    const PRIMING_DELAY: Duration = Duration::from_millis(500);

    /// initializes a new application.
    pub fn new() -> Self {
        Self {
            sentinel: Sentinel::new(),
            probe: ProcFs::default(),
            clock: SystemClock::default(),
        }
    }

    /// runs the poll loop until the user asks to quit.
    ///
    /// a metric failure never stops the loop; it surfaces as an unavailable
    /// field in that cycle's snapshot. the only errors that escape here are
    /// terminal i/o errors from presentation.
    pub fn run(mut self) -> io::Result<()> {
        // seed the rate engine, so the first rendered frame measures a real
        // interval rather than reporting bytes-since-boot. the interval
        // starts at the priming read, not at the first loop iteration.
        self.sentinel.prime(probe::net::read(&self.probe));
        let mut last = self.clock.now();
        std::thread::sleep(Self::PRIMING_DELAY);

        let mut window = Window::open()?;
        info!("monitor started");
        loop {
            if window.quit_requested()? {
                break;
            }

            let now = self.clock.now();
            let elapsed = now.duration_since(last).as_secs_f64();
            last = now;

            let snapshot = Snapshot::collect(&self.probe, &mut self.sentinel, elapsed);
            window.draw(&snapshot)?;

            std::thread::sleep(Self::INTERVAL);
        }

        info!("monitor stopped");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
