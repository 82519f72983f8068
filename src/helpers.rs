//! Sentinel-valued wrappers for callers that expect plain integers.
//!
//! `get_memory_size` returns `0` on failure, which cannot be told apart
//! from a host reporting no memory. `get_num_cores` returns the OS value
//! unchecked, so a failure (`-1`) shows up as `usize::MAX`. Prefer
//! [`physical_memory_bytes`](crate::physical_memory_bytes) and
//! [`logical_core_count`](crate::logical_core_count) in new code.

use tracing::warn;

use crate::probe::{NativeProbe, ResourceProbe};

/// Installed physical memory in bytes, or `0` if the query failed.
///
/// The call used is [`MEMORY_STRATEGY`](crate::MEMORY_STRATEGY). On Cygwin
/// that is `_SC_PHYS_PAGES * _SC_PAGESIZE`, not the 32-bit
/// `GlobalMemoryStatus`, so totals above 4 GiB are reported in full.
pub fn get_memory_size() -> i64 { memory_size_with(&NativeProbe) }

/// Online logical processors as the OS reports them. No validation: `0`
/// passes through and the failure value `-1` wraps to `usize::MAX`.
pub fn get_num_cores() -> usize { num_cores_with(&NativeProbe) }

pub fn memory_size_with(probe: &impl ResourceProbe) -> i64 {
	match probe.physical_memory_bytes().map(i64::try_from) {
		Ok(Ok(bytes)) => bytes,
		Ok(Err(e)) => {
			warn!(error = %e, "physical memory exceeds i64, reporting 0");
			0
		}
		Err(e) => {
			warn!(error = %e, "physical memory query failed, reporting 0");
			0
		}
	}
}

pub fn num_cores_with(probe: &impl ResourceProbe) -> usize {
	let raw = probe.raw_core_count();
	if raw < 0 {
		warn!(raw, "logical core query failed");
	}
	raw as usize
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::{Error, Result};

	struct FailingProbe;

	impl ResourceProbe for FailingProbe {
		fn physical_memory_bytes(&self) -> Result<u64> { Err(Error::ApiCallNone) }

		fn logical_core_count(&self) -> Result<usize> { Err(Error::ApiCallNone) }

		fn raw_core_count(&self) -> i64 { -1 }
	}

	struct FixedProbe(u64, usize);

	impl ResourceProbe for FixedProbe {
		fn physical_memory_bytes(&self) -> Result<u64> { Ok(self.0) }

		fn logical_core_count(&self) -> Result<usize> { Ok(self.1) }

		fn raw_core_count(&self) -> i64 { self.1 as _ }
	}

	/// Host whose OS reports zero online processors.
	struct ZeroCores;

	impl ResourceProbe for ZeroCores {
		fn physical_memory_bytes(&self) -> Result<u64> { Ok(1 << 30) }

		fn logical_core_count(&self) -> Result<usize> { Err(Error::ApiCallNone) }

		fn raw_core_count(&self) -> i64 { 0 }
	}

	#[test]
	fn failed_memory_query_is_zero() {
		assert_eq!(memory_size_with(&FailingProbe), 0);
	}

	#[test]
	fn failed_core_query_wraps() {
		assert_eq!(num_cores_with(&FailingProbe), usize::MAX);
	}

	#[test]
	fn zero_cores_pass_through() {
		assert_eq!(num_cores_with(&ZeroCores), 0);
	}

	#[test]
	fn oversized_memory_is_zero() {
		assert_eq!(memory_size_with(&FixedProbe(u64::MAX, 1)), 0);
	}

	#[test]
	fn sixteen_gib_eight_cores() {
		let probe = FixedProbe(16 << 30, 8);
		let size = memory_size_with(&probe);
		assert!((31 << 29..=16 << 30).contains(&size));
		assert_eq!(num_cores_with(&probe), 8);
	}

	#[test]
	fn native_values_are_plausible() {
		assert!(get_memory_size() > 0);
		let cores = get_num_cores();
		assert!(cores >= 1 && cores != usize::MAX);
	}
}
