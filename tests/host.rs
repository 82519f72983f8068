use std::{sync::Barrier, thread};

use hostprobe::{
	get_memory_size, get_num_cores, helpers::memory_size_with, logical_core_count,
	physical_memory_bytes, snapshot, Error, ResourceProbe, Result,
};

const THREADS: usize = 32;

#[test]
fn memory_is_idempotent() {
	let first = physical_memory_bytes().unwrap();
	for _ in 0..100 {
		assert_eq!(physical_memory_bytes().unwrap(), first);
	}
	assert_eq!(get_memory_size(), first as i64);
}

#[test]
fn legacy_and_checked_agree() {
	assert_eq!(get_num_cores(), logical_core_count().unwrap());
}

#[test]
fn concurrent_queries_agree() {
	let expected = (
		physical_memory_bytes().unwrap(),
		logical_core_count().unwrap(),
		get_memory_size(),
		get_num_cores(),
	);
	let barrier = &Barrier::new(THREADS);

	let results = thread::scope(|s| {
		let handles = (0..THREADS)
			.map(|_| {
				s.spawn(move || {
					barrier.wait();
					(
						physical_memory_bytes().unwrap(),
						logical_core_count().unwrap(),
						get_memory_size(),
						get_num_cores(),
					)
				})
			})
			.collect::<Vec<_>>();
		handles
			.into_iter()
			.map(|h| h.join().unwrap())
			.collect::<Vec<_>>()
	});

	assert_eq!(results.len(), THREADS);
	assert!(results.iter().all(|r| *r == expected));
}

struct BrokenSysctl;

impl ResourceProbe for BrokenSysctl {
	fn physical_memory_bytes(&self) -> Result<u64> {
		Err(Error::Sysctl {
			name: "hw.memsize",
			source: std::io::Error::from_raw_os_error(2),
		})
	}

	fn logical_core_count(&self) -> Result<usize> { Ok(1) }

	fn raw_core_count(&self) -> i64 { 1 }
}

#[test]
fn failing_kernel_control_reports_zero() {
	assert_eq!(memory_size_with(&BrokenSysctl), 0);
	assert!(matches!(
		snapshot(&BrokenSysctl),
		Err(Error::Sysctl { name: "hw.memsize", .. })
	));
}
