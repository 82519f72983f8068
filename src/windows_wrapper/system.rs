use std::mem::size_of;

use windows::Win32::System::SystemInformation::{
	GetSystemInfo, GlobalMemoryStatusEx, MEMORYSTATUSEX, SYSTEM_INFO,
};

use crate::error::Result;

pub struct SystemInfo {
	inner: SYSTEM_INFO,
}

impl SystemInfo {
	pub fn number_of_processors(&self) -> u32 { self.inner.dwNumberOfProcessors }
}

pub fn get_system_info() -> SystemInfo {
	let mut info = SystemInfo {
		inner: SYSTEM_INFO::default(),
	};
	unsafe { GetSystemInfo(&mut info.inner) };
	info
}

/// Snapshot of `MEMORYSTATUSEX`. Only the 64-bit structure is used; the
/// 32-bit `MEMORYSTATUS` caps totals at 4 GiB.
pub struct MemoryStatus {
	inner: MEMORYSTATUSEX,
}

impl MemoryStatus {
	pub fn total_physical(&self) -> u64 { self.inner.ullTotalPhys }
}

pub fn get_memory_status() -> Result<MemoryStatus> {
	let mut status = MemoryStatus {
		inner: MEMORYSTATUSEX {
			dwLength: size_of::<MEMORYSTATUSEX>() as _,
			..Default::default()
		},
	};
	unsafe { GlobalMemoryStatusEx(&mut status.inner) }.ok()?;
	Ok(status)
}
