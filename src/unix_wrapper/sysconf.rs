//! Checked `sysconf(3)` queries.

use libc::{c_int, c_long};

use crate::error::{Error, Result};

/// Reads a configuration value, treating `-1` as failure.
pub fn sysconf(name: &'static str, arg: c_int) -> Result<u64> {
	checked(name, unsafe { libc::sysconf(arg) })
}

/// Validates a raw `sysconf` return value. errno is read only on `-1`.
pub fn checked(name: &'static str, value: c_long) -> Result<u64> {
	if value == -1 {
		return Err(Error::Sysconf {
			name,
			source: std::io::Error::last_os_error(),
		});
	}
	Ok(value.try_into()?)
}

pub fn online_processors() -> Result<u64> {
	sysconf("online processor count", libc::_SC_NPROCESSORS_ONLN)
}

/// `_SC_NPROCESSORS_ONLN` exactly as returned, `-1` included.
pub fn online_processors_raw() -> c_long { unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) } }

/// Installed memory in KiB.
#[cfg(target_os = "aix")]
pub fn aix_real_memory_kib() -> Result<u64> { sysconf("real memory", libc::_SC_AIX_REALMEM) }

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_name_is_an_error() {
		let err = sysconf("bogus", c_int::MAX).unwrap_err();
		assert!(matches!(err, Error::Sysconf { name: "bogus", .. }));
	}

	#[test]
	fn minus_one_is_an_error() {
		assert!(matches!(checked("pages", -1), Err(Error::Sysconf { name: "pages", .. })));
		assert!(matches!(checked("pages", -2), Err(Error::Integer(_))));
		assert_eq!(checked("pages", 0).unwrap(), 0);
	}

	#[test]
	fn page_size_is_power_of_two() {
		let size = sysconf("page size", libc::_SC_PAGESIZE).unwrap();
		assert!(size.is_power_of_two());
	}

	#[test]
	fn online_processors_nonzero() {
		assert!(online_processors().unwrap() >= 1);
		assert_eq!(online_processors_raw() as u64, online_processors().unwrap());
	}
}
