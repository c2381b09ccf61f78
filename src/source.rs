use {
    crate::probe::DiskStats,
    std::{
        cell::RefCell,
        collections::{BTreeMap, VecDeque},
        fs::File,
        io::{self, BufReader, Cursor, Read},
        time::Instant,
    },
};

pub use self::{clock::*, sources::*};

mod clock {
    use super::*;

    pub trait Clock {
        fn now(&self) -> Instant;
    }

    #[derive(Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> Instant {
            Instant::now()
        }
    }

    /// a mock clock.
    #[derive(Default)]
    #[allow(dead_code, reason = "this is a testing utility.")]
    pub struct MockClock {
        times: RefCell<VecDeque<Instant>>,
    }

    impl Clock for MockClock {
        fn now(&self) -> Instant {
            let MockClock { times } = self;

            times
                .borrow_mut()
                .pop_front()
                .expect("mock times should not be empty")
        }
    }
}

/// abstracts over providers of counter and identity sources.
mod sources {
    use super::*;

    /// a provider of the os-exposed counter sources.
    ///
    /// each method covers one metric. a failure in one source says nothing
    /// about the others; callers decide availability per metric.
    pub trait Probe {
        /// returns a reader over the kernel's aggregate cpu statistics.
        fn stat(&self) -> io::Result<impl Read>;
        /// returns a reader over the kernel's memory figures.
        fn meminfo(&self) -> io::Result<impl Read>;
        /// returns a reader over the kernel's uptime text.
        fn uptime(&self) -> io::Result<impl Read>;
        /// returns a reader over the per-interface network counters.
        fn net_dev(&self) -> io::Result<impl Read>;
        /// returns a reader over one thermal zone's temperature.
        fn thermal_zone(&self, zone: u8) -> io::Result<impl Read>;
        /// queries filesystem statistics for the given path.
        fn disk_stats(&self, path: &str) -> io::Result<DiskStats>;
        /// queries the system hostname.
        fn hostname(&self) -> Option<String>;
        /// looks up the current user's name.
        fn username(&self) -> Option<String>;
    }

    /// counters backed by procfs, sysfs, and libc.
    #[derive(Default)]
    pub struct ProcFs;

    /// a mock probe.
    ///
    /// text sources pop from per-metric queues; an exhausted queue reads as
    /// an unavailable source.
    #[derive(Default)]
    #[allow(dead_code, reason = "this is a testing utility.")]
    pub struct MockProbe {
        pub stat: RefCell<VecDeque<String>>,
        pub meminfo: RefCell<VecDeque<String>>,
        pub uptime: RefCell<VecDeque<String>>,
        pub net_dev: RefCell<VecDeque<String>>,
        pub thermal: BTreeMap<u8, String>,
        pub disk: Option<DiskStats>,
        pub host: Option<String>,
        pub user: Option<String>,
    }

    // === impl ProcFs ===

    impl ProcFs {
        const STAT: &str = "/proc/stat";
        const MEMINFO: &str = "/proc/meminfo";
        const UPTIME: &str = "/proc/uptime";
        const NET_DEV: &str = "/proc/net/dev";

        fn thermal_path(zone: u8) -> String {
            format!("/sys/class/thermal/thermal_zone{zone}/temp")
        }
    }

    impl Probe for ProcFs {
        fn stat(&self) -> io::Result<impl Read> {
            File::open(Self::STAT).map(BufReader::new)
        }

        fn meminfo(&self) -> io::Result<impl Read> {
            File::open(Self::MEMINFO).map(BufReader::new)
        }

        fn uptime(&self) -> io::Result<impl Read> {
            File::open(Self::UPTIME).map(BufReader::new)
        }

        fn net_dev(&self) -> io::Result<impl Read> {
            File::open(Self::NET_DEV).map(BufReader::new)
        }

        fn thermal_zone(&self, zone: u8) -> io::Result<impl Read> {
            File::open(Self::thermal_path(zone)).map(BufReader::new)
        }

        fn disk_stats(&self, path: &str) -> io::Result<DiskStats> {
            crate::probe::disk::statvfs(path)
        }

        fn hostname(&self) -> Option<String> {
            crate::probe::host::hostname()
        }

        fn username(&self) -> Option<String> {
            crate::probe::host::username()
        }
    }

    // === impl MockProbe ===

    impl MockProbe {
        fn pop(queue: &RefCell<VecDeque<String>>) -> io::Result<Cursor<String>> {
            queue
                .borrow_mut()
                .pop_front()
                .map(Cursor::new)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    impl Probe for MockProbe {
        fn stat(&self) -> io::Result<impl Read> {
            Self::pop(&self.stat)
        }

        fn meminfo(&self) -> io::Result<impl Read> {
            Self::pop(&self.meminfo)
        }

        fn uptime(&self) -> io::Result<impl Read> {
            Self::pop(&self.uptime)
        }

        fn net_dev(&self) -> io::Result<impl Read> {
            Self::pop(&self.net_dev)
        }

        fn thermal_zone(&self, zone: u8) -> io::Result<impl Read> {
            self.thermal
                .get(&zone)
                .cloned()
                .map(Cursor::new)
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn disk_stats(&self, _path: &str) -> io::Result<DiskStats> {
            self.disk
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn hostname(&self) -> Option<String> {
            self.host.clone()
        }

        fn username(&self) -> Option<String> {
            self.user.clone()
        }
    }
}
