use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[cfg(windows)]
	#[error(transparent)]
	Windows(#[from] windows::core::Error),
	#[error("sysconf failed querying {name}: {source}")]
	Sysconf {
		name: &'static str,
		source: std::io::Error,
	},
	#[error("sysctl failed querying {name}: {source}")]
	Sysctl {
		name: &'static str,
		source: std::io::Error,
	},
	#[error("an API call returned nothing")]
	ApiCallNone,
	#[error("value does not fit the result type")]
	Overflow,
	#[error(transparent)]
	Integer(#[from] std::num::TryFromIntError),
}
