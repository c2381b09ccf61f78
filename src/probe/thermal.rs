use {crate::source::Probe, std::io::Read};

/// the number of thermal zones probed before giving up.
const ZONES: u8 = 10;

/// probes the thermal zones for a cpu temperature, in celsius.
///
/// zones are tried in a fixed order and the first numeric reading wins;
/// the probe never looks past zone 9. readings above 1000 are taken to be
/// millidegrees and scaled down.
pub fn read(probe: &impl Probe) -> Option<f64> {
    for zone in 0..ZONES {
        let Ok(mut reader) = probe.thermal_zone(zone) else {
            continue;
        };

        let mut text = String::new();
        if reader.read_to_string(&mut text).is_err() {
            continue;
        }

        let Ok(raw) = text.trim().parse::<i64>() else {
            continue;
        };

        return Some(if raw > 1000 {
            raw as f64 / 1000.0
        } else {
            raw as f64
        });
    }

    None
}
