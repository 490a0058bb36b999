//! # Contract Math
//!
//! Fixed-point helpers used to turn vesting schedules into release timelines
//! and release amounts.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod types;
pub mod vesting;

#[macro_export]
macro_rules! ensure {
	($e:expr, $f:expr) => {
		match $e {
			true => (),
			false => {
				return Err($f);
			}
		}
	};
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum MathError {
	#[cfg_attr(feature = "std", error("arithmetic overflow"))]
	Overflow,
	#[cfg_attr(feature = "std", error("release percentage is zero"))]
	ZeroPercent,
	#[cfg_attr(feature = "std", error("percentage exceeds 100%"))]
	PercentOutOfRange,
}
