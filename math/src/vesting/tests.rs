use super::*;
use crate::types::ONE_HUNDRED_PERCENT;
use crate::MathError;

use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(100_000, 1 ; "full release needs one cycle")]
#[test_case(50_000, 2 ; "half per cycle")]
#[test_case(30_000, 4 ; "remainder needs an extra cycle")]
#[test_case(33_333, 4 ; "thirds do not divide evenly")]
#[test_case(25_000, 4 ; "quarters")]
#[test_case(2, 50_000 ; "smallest percentage that fits")]
fn total_cycles_should_round_up(release_percent: u32, expected: u16) {
	assert_eq!(calculate_total_cycles(release_percent), Ok(expected));
}

#[test]
fn total_cycles_should_fail_for_invalid_percent() {
	assert_eq!(calculate_total_cycles(0), Err(MathError::ZeroPercent));
	assert_eq!(
		calculate_total_cycles(ONE_HUNDRED_PERCENT + 1),
		Err(MathError::PercentOutOfRange)
	);
	// 100_000 cycles do not fit into u16
	assert_eq!(calculate_total_cycles(1), Err(MathError::Overflow));
}

#[test]
fn last_cycle_should_release_remainder() {
	let percents: Vec<u32> = (0..5).map(|cycle| calculate_cycle_release_percent(30_000, cycle)).collect();

	assert_eq!(percents, vec![30_000, 30_000, 30_000, 10_000, 0]);
}

#[test]
fn released_percent_should_be_capped() {
	assert_eq!(calculate_released_percent(30_000, 3), 90_000);
	assert_eq!(calculate_released_percent(30_000, 4), ONE_HUNDRED_PERCENT);
	assert_eq!(calculate_released_percent(ONE_HUNDRED_PERCENT, u16::MAX), ONE_HUNDRED_PERCENT);
}

#[test]
fn release_offset_should_grow_by_interval() {
	assert_eq!(calculate_release_offset_hours(24, 0), Ok(24));
	assert_eq!(calculate_release_offset_hours(24, 1), Ok(48));
	assert_eq!(calculate_release_offset_hours(0, 10), Ok(0));
	assert_eq!(
		calculate_release_offset_hours(u32::MAX, u16::MAX),
		Ok(u32::MAX as u64 * 65_536)
	);
}

#[test]
fn percent_of_should_round_down() {
	assert_eq!(calculate_percent_of(1_000, 30_000), Ok(300));
	assert_eq!(calculate_percent_of(10, 33_333), Ok(3));
	assert_eq!(calculate_percent_of(u128::MAX, ONE_HUNDRED_PERCENT), Ok(u128::MAX));
	assert_eq!(calculate_percent_of(0, 50_000), Ok(0));
	assert_eq!(
		calculate_percent_of(1_000, ONE_HUNDRED_PERCENT + 1),
		Err(MathError::PercentOutOfRange)
	);
}

#[test]
fn cycle_release_amounts_should_add_up_to_entitlement() {
	let entitlement = 1_000;
	let mut paid = 0;
	let mut amounts = vec![];

	for cycle in 0..calculate_total_cycles(30_000).unwrap() {
		let amount = calculate_cycle_release_amount(entitlement, paid, 30_000, cycle).unwrap();
		paid += amount;
		amounts.push(amount);
	}

	assert_eq!(amounts, vec![300, 300, 300, 100]);
	assert_eq!(paid, entitlement);
}

#[test]
fn cycle_release_amount_should_not_leave_dust() {
	let entitlement = 10;
	let mut paid = 0;
	let mut amounts = vec![];

	for cycle in 0..3 {
		let amount = calculate_cycle_release_amount(entitlement, paid, 33_334, cycle).unwrap();
		paid += amount;
		amounts.push(amount);
	}

	assert_eq!(amounts, vec![3, 3, 4]);
	assert_eq!(paid, entitlement);
}

#[test]
fn cycle_release_amount_should_be_zero_when_already_paid() {
	assert_eq!(calculate_cycle_release_amount(1_000, 1_000, 50_000, 0), Ok(0));
	assert_eq!(calculate_cycle_release_amount(1_000, 0, 50_000, 5), Ok(1_000));
}
