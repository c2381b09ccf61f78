use {
    crate::source::Probe,
    std::{
        collections::BTreeMap,
        io::{BufRead, BufReader},
    },
};

/// cumulative byte counters for one network interface.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counters {
    /// bytes received.
    pub rx: u64,
    /// bytes transmitted.
    pub tx: u64,
}

/// reads per-interface byte counters from the given probe.
///
/// an unreadable source yields an empty map: a valid, if uninteresting,
/// result rather than an error.
pub fn read(probe: &impl Probe) -> BTreeMap<String, Counters> {
    let Ok(reader) = probe.net_dev() else {
        return BTreeMap::new();
    };

    parse(BufReader::new(reader))
}

/// parses the body of `/proc/net/dev`.
///
/// the first two lines are column headers. each remaining line names an
/// interface (with a trailing colon) followed by sixteen numeric fields;
/// received bytes are the first, transmitted bytes the ninth.
fn parse(reader: impl BufRead) -> BTreeMap<String, Counters> {
    let mut interfaces = BTreeMap::new();

    for line in reader.lines().skip(2) {
        let Ok(line) = line else { break };

        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else { continue };
        let name = name.strip_suffix(':').unwrap_or(name).to_owned();

        let rx = tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0);
        // seven packet and error counts sit between rx bytes and tx bytes.
        let tx = tokens.nth(7).and_then(|t| t.parse().ok()).unwrap_or(0);

        interfaces.insert(name, Counters { rx, tx });
    }

    interfaces
}
