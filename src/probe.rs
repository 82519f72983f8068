//! Host resource queries.
//!
//! Each target compiles in exactly one memory strategy; there is no
//! runtime fallback between them. Targets that are neither unix nor
//! windows fail to build.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
#[cfg(unix)]
use crate::unix_wrapper::sysconf;
#[cfg(any(
	target_vendor = "apple",
	target_os = "netbsd",
	target_os = "openbsd",
	target_os = "dragonfly"
))]
use crate::unix_wrapper::sysctl;
#[cfg(windows)]
use crate::windows_wrapper::system::{get_memory_status, get_system_info};

#[cfg(not(any(unix, windows)))]
compile_error!("no physical memory query is available for this target");

/// The native call used to read installed memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemoryStrategy {
	/// 64-bit `CTL_HW` sysctl (`hw.memsize`, `hw.physmem64`).
	Sysctl64,
	/// `_SC_AIX_REALMEM`, reported in KiB.
	AixRealMem,
	/// `_SC_PHYS_PAGES * _SC_PAGESIZE`. Cygwin is a unix target and takes
	/// this path rather than the 32-bit `GlobalMemoryStatus`, which caps
	/// totals at 4 GiB.
	PhysPages,
	/// `_SC_PHYS_PAGES * _SC_PAGE_SIZE`.
	LegacyPhysPages,
	/// 32-bit `CTL_HW` sysctl (`hw.physmem`).
	Sysctl32,
	/// `GlobalMemoryStatusEx`.
	GlobalMemoryStatus,
}

#[cfg(any(target_vendor = "apple", target_os = "netbsd", target_os = "openbsd"))]
pub const MEMORY_STRATEGY: MemoryStrategy = MemoryStrategy::Sysctl64;
#[cfg(target_os = "aix")]
pub const MEMORY_STRATEGY: MemoryStrategy = MemoryStrategy::AixRealMem;
#[cfg(all(
	unix,
	not(any(
		target_vendor = "apple",
		target_os = "netbsd",
		target_os = "openbsd",
		target_os = "aix",
		target_os = "android",
		target_os = "dragonfly"
	))
))]
pub const MEMORY_STRATEGY: MemoryStrategy = MemoryStrategy::PhysPages;
#[cfg(target_os = "android")]
pub const MEMORY_STRATEGY: MemoryStrategy = MemoryStrategy::LegacyPhysPages;
#[cfg(target_os = "dragonfly")]
pub const MEMORY_STRATEGY: MemoryStrategy = MemoryStrategy::Sysctl32;
#[cfg(windows)]
pub const MEMORY_STRATEGY: MemoryStrategy = MemoryStrategy::GlobalMemoryStatus;

/// Both host values read together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostResources {
	pub physical_memory_bytes: u64,
	pub logical_cores: usize,
}

pub trait ResourceProbe {
	/// Installed physical memory in bytes. Never `Ok(0)`.
	fn physical_memory_bytes(&self) -> Result<u64>;

	/// Logical processors currently online. Never `Ok(0)`.
	fn logical_core_count(&self) -> Result<usize>;

	/// Online processor count exactly as the OS reported it, unvalidated.
	/// `-1` is the POSIX failure value.
	fn raw_core_count(&self) -> i64;
}

/// Queries the running host through the compiled-in OS calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeProbe;

impl ResourceProbe for NativeProbe {
	fn physical_memory_bytes(&self) -> Result<u64> {
		let bytes = native_memory_bytes()?;
		if bytes == 0 {
			return Err(Error::ApiCallNone);
		}
		debug!(bytes, strategy = ?MEMORY_STRATEGY, "queried physical memory");
		Ok(bytes)
	}

	fn logical_core_count(&self) -> Result<usize> {
		let cores = native_core_count()?;
		if cores == 0 {
			return Err(Error::ApiCallNone);
		}
		debug!(cores, "queried online logical cores");
		Ok(cores)
	}

	fn raw_core_count(&self) -> i64 { native_raw_core_count() }
}

pub fn snapshot(probe: &impl ResourceProbe) -> Result<HostResources> {
	Ok(HostResources {
		physical_memory_bytes: probe.physical_memory_bytes()?,
		logical_cores: probe.logical_core_count()?,
	})
}

/// Multiplies a page count by the page size.
pub fn pages_to_bytes(pages: u64, page_size: u64) -> Result<u64> {
	pages.checked_mul(page_size).ok_or(Error::Overflow)
}

/// Physical pages times page size, read through `query`. `page_size_arg`
/// selects `_SC_PAGESIZE` or the older `_SC_PAGE_SIZE` spelling.
#[cfg(all(
	unix,
	not(any(
		target_vendor = "apple",
		target_os = "netbsd",
		target_os = "openbsd",
		target_os = "aix",
		target_os = "dragonfly"
	))
))]
pub fn page_product_with(
	query: impl Fn(&'static str, libc::c_int) -> Result<u64>,
	page_size_arg: libc::c_int,
) -> Result<u64> {
	pages_to_bytes(
		query("physical pages", libc::_SC_PHYS_PAGES)?,
		query("page size", page_size_arg)?,
	)
}

#[cfg(any(target_vendor = "apple", target_os = "netbsd", target_os = "openbsd"))]
fn native_memory_bytes() -> Result<u64> { sysctl::memory_size_64() }

#[cfg(target_os = "aix")]
fn native_memory_bytes() -> Result<u64> {
	sysconf::aix_real_memory_kib()?
		.checked_mul(1024)
		.ok_or(Error::Overflow)
}

#[cfg(all(
	unix,
	not(any(
		target_vendor = "apple",
		target_os = "netbsd",
		target_os = "openbsd",
		target_os = "aix",
		target_os = "android",
		target_os = "dragonfly"
	))
))]
fn native_memory_bytes() -> Result<u64> {
	page_product_with(sysconf::sysconf, libc::_SC_PAGESIZE)
}

#[cfg(target_os = "android")]
fn native_memory_bytes() -> Result<u64> {
	page_product_with(sysconf::sysconf, libc::_SC_PAGE_SIZE)
}

#[cfg(target_os = "dragonfly")]
fn native_memory_bytes() -> Result<u64> {
	let size = sysctl::memory_size_32()?;
	if size == u32::MAX {
		tracing::warn!(size, "hw.physmem is saturated, reported memory may be truncated");
	}
	Ok(size.into())
}

#[cfg(windows)]
fn native_memory_bytes() -> Result<u64> { Ok(get_memory_status()?.total_physical()) }

#[cfg(unix)]
fn native_core_count() -> Result<usize> { Ok(sysconf::online_processors()?.try_into()?) }

#[cfg(windows)]
fn native_core_count() -> Result<usize> { Ok(get_system_info().number_of_processors() as _) }

#[cfg(unix)]
fn native_raw_core_count() -> i64 { sysconf::online_processors_raw() as _ }

#[cfg(windows)]
fn native_raw_core_count() -> i64 { get_system_info().number_of_processors().into() }
