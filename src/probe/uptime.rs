use {crate::source::Probe, std::io::Read};

/// reads the system uptime, in seconds.
///
/// uptime has no natural "unknown" rendering, so any failure reads as 0.0
/// rather than an explicit unavailable marker.
pub fn read(probe: &impl Probe) -> f64 {
    let Ok(mut reader) = probe.uptime() else {
        return 0.0;
    };

    let mut text = String::new();
    if reader.read_to_string(&mut text).is_err() {
        return 0.0;
    }

    text.split_whitespace()
        .next()
        .and_then(|seconds| seconds.parse().ok())
        .unwrap_or(0.0)
}
