use {
    super::ProbeError,
    crate::source::Probe,
    std::{ffi::CString, io, mem::MaybeUninit},
};

/// filesystem figures reported by `statvfs(3)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiskStats {
    /// size of the filesystem, in fragment-size units.
    pub blocks: u64,
    /// free blocks available to unprivileged users.
    pub bavail: u64,
    /// fragment size, in bytes.
    pub frsize: u64,
}

/// reads the usage percentage of the filesystem holding `path`.
pub fn usage(probe: &impl Probe, path: &str) -> Result<f64, ProbeError> {
    probe
        .disk_stats(path)
        .map(percent)
        .map_err(ProbeError::from)
}

/// computes the used percentage from raw filesystem figures.
///
/// a zero-sized filesystem is a degenerate but valid report, and reads as
/// 0% used rather than unavailable.
pub(crate) fn percent(
    DiskStats {
        blocks,
        bavail,
        frsize,
    }: DiskStats,
) -> f64 {
    // kernel reports can be large or inconsistent (bavail above blocks);
    // saturate rather than overflow.
    let total = blocks.saturating_mul(frsize);
    let available = bavail.saturating_mul(frsize);

    if total == 0 {
        return 0.0;
    }

    total.saturating_sub(available) as f64 * 100.0 / total as f64
}

/// queries `statvfs(3)` for the filesystem holding `path`.
pub(crate) fn statvfs(path: &str) -> io::Result<DiskStats> {
    let path = CString::new(path).map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;

    let mut stats = MaybeUninit::<libc::statvfs>::uninit();
    // SAFETY: `path` is nul-terminated and `stats` is a properly sized
    // out-parameter.
    let rc = unsafe { libc::statvfs(path.as_ptr(), stats.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    // SAFETY: `statvfs` returned 0, so `stats` is initialized.
    let stats = unsafe { stats.assume_init() };

    Ok(DiskStats {
        blocks: stats.f_blocks as u64,
        bavail: stats.f_bavail as u64,
        frsize: stats.f_frsize as u64,
    })
}
