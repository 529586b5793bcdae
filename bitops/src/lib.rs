#[cfg(feature = "bfc")]
pub mod bfc;

#[cfg(feature = "bfc")]
#[allow(clippy::cast_possible_truncation)]
pub mod field;
