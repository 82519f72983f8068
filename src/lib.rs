pub mod error;
pub mod helpers;
pub mod probe;
#[cfg(unix)]
pub mod unix_wrapper;
#[cfg(windows)]
pub mod windows_wrapper;

pub use crate::{
	error::{Error, Result},
	helpers::{get_memory_size, get_num_cores},
	probe::{snapshot, HostResources, MemoryStrategy, NativeProbe, ResourceProbe, MEMORY_STRATEGY},
};

/// Installed physical memory of this host in bytes.
pub fn physical_memory_bytes() -> Result<u64> { NativeProbe.physical_memory_bytes() }

/// Number of logical processors currently online.
pub fn logical_core_count() -> Result<usize> { NativeProbe.logical_core_count() }
