pub mod sysconf;
#[cfg(any(
	target_vendor = "apple",
	target_os = "netbsd",
	target_os = "openbsd",
	target_os = "dragonfly"
))]
pub mod sysctl;
