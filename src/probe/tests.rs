use {
    super::*,
    crate::source::MockProbe,
    std::{cell::RefCell, collections::VecDeque},
};

fn queue(texts: &[&str]) -> RefCell<VecDeque<String>> {
    RefCell::new(texts.iter().map(|t| (*t).to_owned()).collect())
}

mod cpu_tests {
    use super::*;

    // the first lines of a real /proc/stat, trailing guest fields included.
    const EXAMPLE: &str = "cpu  10132153 290696 3084719 46828483 16683 0 25195 0 175628 0";

    #[test]
    fn parses_the_aggregate_line() {
        let ticks = EXAMPLE.parse::<CpuTicks>().unwrap();
        assert_eq!(ticks.user, 10132153);
        assert_eq!(ticks.nice, 290696);
        assert_eq!(ticks.system, 3084719);
        assert_eq!(ticks.idle, 46828483);
        assert_eq!(ticks.iowait, 16683);
        assert_eq!(ticks.steal, 0);
    }

    #[test]
    fn totals_add_up() {
        let ticks = "cpu  90 0 0 10 5 0 0 0".parse::<CpuTicks>().unwrap();
        assert_eq!(ticks.idle_time(), 15);
        assert_eq!(ticks.non_idle(), 90);
        assert_eq!(ticks.total(), 105);
    }

    #[test]
    fn rejects_a_per_cpu_label() {
        let err = "cpu0 90 0 0 10 0 0 0 0".parse::<CpuTicks>().unwrap_err();
        assert!(matches!(err, ProbeError::Cpu(_)));
    }

    #[test]
    fn rejects_missing_counters() {
        let err = "cpu 90 0 0 10".parse::<CpuTicks>().unwrap_err();
        assert!(matches!(err, ProbeError::Cpu(_)));
    }

    #[test]
    fn rejects_garbage_counters() {
        let err = "cpu 90 0 x 10 0 0 0 0".parse::<CpuTicks>().unwrap_err();
        assert!(matches!(err, ProbeError::Cpu(_)));
    }

    #[test]
    fn read_takes_the_first_line_only() {
        let probe = MockProbe {
            stat: queue(&[&format!(
                "{EXAMPLE}\ncpu0 1393280 32966 572056 13343292 6130 0 17875 0 23933 0"
            )]),
            ..MockProbe::default()
        };

        let ticks = CpuTicks::read(&probe).unwrap();
        assert_eq!(ticks.user, 10132153);
    }

    #[test]
    fn read_reports_an_unreadable_source() {
        let probe = MockProbe::default();
        let err = CpuTicks::read(&probe).unwrap_err();
        assert!(matches!(err, ProbeError::Io(_)));
    }
}

mod mem_tests {
    use super::*;

    const EXAMPLE: &str = "MemTotal:       16384000 kB\n\
                           MemFree:         1024000 kB\n\
                           MemAvailable:    8192000 kB\n\
                           Buffers:          512000 kB";

    fn with_meminfo(text: &str) -> MockProbe {
        MockProbe {
            meminfo: queue(&[text]),
            ..MockProbe::default()
        }
    }

    #[test]
    fn finds_both_keys() {
        let mem = MemInfo::read(&with_meminfo(EXAMPLE)).unwrap();
        assert_eq!(mem.total_kb, 16384000);
        assert_eq!(mem.available_kb, 8192000);
        assert_eq!(mem.percent(), 50.0);
    }

    /// the scan ends as soon as MemAvailable is seen; entries after it
    /// cannot override what was read.
    #[test]
    fn stops_scanning_after_available() {
        let text = "MemTotal: 1000 kB\nMemAvailable: 250 kB\nMemTotal: 999999 kB";
        let mem = MemInfo::read(&with_meminfo(text)).unwrap();
        assert_eq!(mem.total_kb, 1000);
        assert_eq!(mem.percent(), 75.0);
    }

    /// a kernel without MemAvailable reads as fully-used memory.
    #[test]
    fn missing_available_reads_as_full() {
        let mem = MemInfo::read(&with_meminfo("MemTotal: 1000 kB")).unwrap();
        assert_eq!(mem.percent(), 100.0);
    }

    #[test]
    fn zero_total_is_unavailable() {
        let err = MemInfo::read(&with_meminfo("MemFree: 1000 kB")).unwrap_err();
        assert!(matches!(err, ProbeError::ZeroTotalMemory));
    }

    #[test]
    fn unreadable_source_is_unavailable() {
        let err = MemInfo::read(&MockProbe::default()).unwrap_err();
        assert!(matches!(err, ProbeError::Io(_)));
    }
}

mod net_tests {
    use super::*;

    const HEADER: &str = "Inter-|   Receive                                                |  Transmit\n face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed";

    fn with_net_dev(interfaces: &[&str]) -> MockProbe {
        MockProbe {
            net_dev: queue(&[&format!("{HEADER}\n{}", interfaces.join("\n"))]),
            ..MockProbe::default()
        }
    }

    #[test]
    fn parses_interfaces_past_the_headers() {
        let probe = with_net_dev(&[
            "    lo: 1234 10 0 0 0 0 0 0 1234 10 0 0 0 0 0 0",
            "  eth0: 5000 40 0 0 0 0 0 0 2500 20 0 0 0 0 0 0",
        ]);

        let interfaces = net::read(&probe);
        assert_eq!(interfaces.len(), 2);
        assert_eq!(interfaces["lo"], Counters { rx: 1234, tx: 1234 });
        assert_eq!(interfaces["eth0"], Counters { rx: 5000, tx: 2500 });
    }

    /// tx bytes are the ninth numeric field; the packet and error counts
    /// in between must not be misread.
    #[test]
    fn tx_skips_seven_fields() {
        let probe = with_net_dev(&["  eth0: 100 1 2 3 4 5 6 7 900 8 9 10 11 12 13 14"]);

        let interfaces = net::read(&probe);
        assert_eq!(interfaces["eth0"], Counters { rx: 100, tx: 900 });
    }

    #[test]
    fn blank_lines_are_skipped() {
        let probe = with_net_dev(&["", "  eth0: 100 0 0 0 0 0 0 0 50 0 0 0 0 0 0 0"]);

        let interfaces = net::read(&probe);
        assert_eq!(interfaces.len(), 1);
        assert!(interfaces.contains_key("eth0"));
    }

    #[test]
    fn short_lines_default_missing_fields_to_zero() {
        let probe = with_net_dev(&["  eth0: 100"]);

        let interfaces = net::read(&probe);
        assert_eq!(interfaces["eth0"], Counters { rx: 100, tx: 0 });
    }

    #[test]
    fn unreadable_source_reads_as_empty() {
        let interfaces = net::read(&MockProbe::default());
        assert!(interfaces.is_empty());
    }
}

mod thermal_tests {
    use super::*;

    fn with_zones(zones: &[(u8, &str)]) -> MockProbe {
        MockProbe {
            thermal: zones
                .iter()
                .map(|&(zone, text)| (zone, text.to_owned()))
                .collect(),
            ..MockProbe::default()
        }
    }

    #[test]
    fn first_zone_wins() {
        let probe = with_zones(&[(0, "45000\n"), (1, "55000\n")]);
        assert_eq!(thermal::read(&probe), Some(45.0));
    }

    #[test]
    fn millidegrees_are_scaled_down() {
        let probe = with_zones(&[(2, "47500\n")]);
        assert_eq!(thermal::read(&probe), Some(47.5));
    }

    #[test]
    fn whole_degrees_pass_through() {
        let probe = with_zones(&[(3, "42\n")]);
        assert_eq!(thermal::read(&probe), Some(42.0));
    }

    #[test]
    fn unparsable_zones_are_passed_over() {
        let probe = with_zones(&[(0, "garbage"), (1, "30000\n")]);
        assert_eq!(thermal::read(&probe), Some(30.0));
    }

    /// the probe is bounded: zone 10 is never consulted.
    #[test]
    fn zones_past_the_bound_are_never_probed() {
        let probe = with_zones(&[(10, "99000\n")]);
        assert_eq!(thermal::read(&probe), None);
    }

    #[test]
    fn no_zones_reads_as_unavailable() {
        assert_eq!(thermal::read(&MockProbe::default()), None);
    }
}

mod disk_tests {
    use super::*;

    #[test]
    fn used_fraction_of_the_filesystem() {
        let percent = disk::percent(DiskStats {
            blocks: 100,
            bavail: 25,
            frsize: 4096,
        });
        assert_eq!(percent, 75.0);
    }

    /// a zero-sized filesystem is a valid, degenerate report: 0% used,
    /// not unavailable.
    #[test]
    fn zero_total_reads_as_zero_percent() {
        let percent = disk::percent(DiskStats {
            blocks: 0,
            bavail: 0,
            frsize: 4096,
        });
        assert_eq!(percent, 0.0);
    }

    /// more available than total blocks is an inconsistent report, not a
    /// reason to underflow; it reads as nothing used.
    #[test]
    fn excess_available_blocks_read_as_zero_percent() {
        let percent = disk::percent(DiskStats {
            blocks: 100,
            bavail: 150,
            frsize: 4096,
        });
        assert_eq!(percent, 0.0);
    }

    #[test]
    fn huge_filesystems_do_not_overflow() {
        let percent = disk::percent(DiskStats {
            blocks: u64::MAX,
            bavail: u64::MAX / 2,
            frsize: 4096,
        });
        assert!((0.0..=100.0).contains(&percent));
    }

    #[test]
    fn failed_statistics_are_unavailable() {
        let err = disk::usage(&MockProbe::default(), "/").unwrap_err();
        assert!(matches!(err, ProbeError::Io(_)));
    }
}

mod uptime_tests {
    use super::*;

    #[test]
    fn parses_the_first_field() {
        let probe = MockProbe {
            uptime: queue(&["12345.67 99999.01\n"]),
            ..MockProbe::default()
        };
        assert_eq!(uptime::read(&probe), 12345.67);
    }

    #[test]
    fn unreadable_source_reads_as_zero() {
        assert_eq!(uptime::read(&MockProbe::default()), 0.0);
    }

    #[test]
    fn garbage_reads_as_zero() {
        let probe = MockProbe {
            uptime: queue(&["not-a-number\n"]),
            ..MockProbe::default()
        };
        assert_eq!(uptime::read(&probe), 0.0);
    }
}
