//! counter readers.
//!
//! stateless, per-metric readers over the os-exposed counter sources. each
//! reader has its own failure shape, per its source's contract; none of
//! them panic on a missing or malformed source.

use std::io;

pub use self::{cpu::CpuTicks, disk::DiskStats, mem::MemInfo, net::Counters};

pub mod cpu;
pub mod disk;
pub(crate) mod host;
pub mod mem;
pub mod net;
pub mod thermal;
pub mod uptime;

#[cfg(test)]
mod tests;

/// a counter source that could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// the source could not be opened or read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// the aggregate cpu line was missing or malformed.
    #[error("malformed cpu statistics: {0}")]
    Cpu(String),
    /// the kernel reported zero total memory, which would divide by zero.
    #[error("total memory reported as zero")]
    ZeroTotalMemory,
}
