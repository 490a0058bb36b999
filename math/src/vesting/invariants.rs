use super::*;
use crate::types::{Balance, ONE_HUNDRED_PERCENT};

use proptest::prelude::*;

fn release_percent() -> impl Strategy<Value = u32> {
	// smallest percentage whose cycle count fits into u16
	2..=ONE_HUNDRED_PERCENT
}

fn entitlement() -> impl Strategy<Value = Balance> {
	0..=(i64::MAX as Balance)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(1000))]
	#[test]
	fn cycle_percents_should_sum_to_one_hundred_percent(release_percent in release_percent()) {
		let cycles = calculate_total_cycles(release_percent).unwrap();

		let total: u64 = (0..cycles)
			.map(|cycle| calculate_cycle_release_percent(release_percent, cycle) as u64)
			.sum();

		prop_assert_eq!(total, ONE_HUNDRED_PERCENT as u64);
		prop_assert_eq!(calculate_cycle_release_percent(release_percent, cycles), 0);
	}
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(1000))]
	#[test]
	fn only_last_cycle_should_release_less(release_percent in release_percent()) {
		let cycles = calculate_total_cycles(release_percent).unwrap();

		for cycle in 0..cycles - 1 {
			prop_assert_eq!(calculate_cycle_release_percent(release_percent, cycle), release_percent);
		}
		prop_assert!(calculate_cycle_release_percent(release_percent, cycles - 1) > 0);
	}
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(200))]
	#[test]
	fn release_amounts_should_never_exceed_entitlement(
		entitlement in entitlement(),
		release_percent in 1_000..=ONE_HUNDRED_PERCENT,
	) {
		let cycles = calculate_total_cycles(release_percent).unwrap();
		let mut paid: Balance = 0;

		for cycle in 0..cycles {
			let amount = calculate_cycle_release_amount(entitlement, paid, release_percent, cycle).unwrap();
			paid += amount;
			prop_assert!(paid <= entitlement);
		}

		prop_assert_eq!(paid, entitlement);
	}
}
