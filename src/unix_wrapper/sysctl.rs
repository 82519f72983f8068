//! `sysctl(3)` reads under the `CTL_HW` tree.

use std::{
	mem::size_of,
	ptr::{addr_of_mut, null_mut},
};

use libc::{c_int, c_void};

use crate::error::{Error, Result};

fn read_hw<T: Default>(name: &'static str, id: c_int) -> Result<T> {
	let mut mib = [libc::CTL_HW, id];
	let mut value = T::default();
	let mut len = size_of::<T>();
	let ret = unsafe {
		libc::sysctl(
			mib.as_mut_ptr(),
			mib.len() as _,
			addr_of_mut!(value) as *mut c_void,
			&mut len,
			null_mut(),
			0,
		)
	};
	if ret != 0 {
		return Err(Error::Sysctl {
			name,
			source: std::io::Error::last_os_error(),
		});
	}
	Ok(value)
}

/// `hw.memsize` on Apple platforms, `hw.physmem64` on NetBSD and OpenBSD.
#[cfg(any(target_vendor = "apple", target_os = "netbsd", target_os = "openbsd"))]
pub fn memory_size_64() -> Result<u64> {
	#[cfg(target_vendor = "apple")]
	let (name, id) = ("hw.memsize", libc::HW_MEMSIZE);
	#[cfg(any(target_os = "netbsd", target_os = "openbsd"))]
	let (name, id) = ("hw.physmem64", libc::HW_PHYSMEM64);
	let size: i64 = read_hw(name, id)?;
	Ok(size.try_into()?)
}

/// `hw.physmem` through a 32-bit buffer. Values above 4 GiB do not fit and
/// come back truncated or as an error depending on the kernel.
#[cfg(target_os = "dragonfly")]
pub fn memory_size_32() -> Result<u32> { read_hw("hw.physmem", libc::HW_PHYSMEM) }
