use crate::types::{Balance, Cycle, PercentX100000, ONE_HUNDRED_PERCENT};
use crate::{ensure, MathError};

use sp_arithmetic::Rounding;

/// Validates a per-cycle release percentage.
pub fn ensure_release_percent(release_percent: PercentX100000) -> Result<(), MathError> {
	ensure!(release_percent != 0, MathError::ZeroPercent);
	ensure!(release_percent <= ONE_HUNDRED_PERCENT, MathError::PercentOutOfRange);
	Ok(())
}

/// Function calculates the minimum number of releases needed to reach full payout.
///
/// `total_cycles = ceil(100_000 / release_percent)`
///
/// Fails with `Overflow` when the count does not fit into [`Cycle`].
pub fn calculate_total_cycles(release_percent: PercentX100000) -> Result<Cycle, MathError> {
	ensure_release_percent(release_percent)?;

	let cycles = ONE_HUNDRED_PERCENT.div_ceil(release_percent);
	Cycle::try_from(cycles).map_err(|_| MathError::Overflow)
}

/// Function calculates cumulative percentage released after `cycles` releases, capped at 100%.
pub fn calculate_released_percent(release_percent: PercentX100000, cycles: Cycle) -> PercentX100000 {
	let released = (release_percent as u64).saturating_mul(cycles as u64);
	released.min(ONE_HUNDRED_PERCENT as u64) as PercentX100000
}

/// Function calculates percentage released by the cycle following `cycle` previous releases.
///
/// `percent(cycle) = min(release_percent, 100_000 - release_percent * cycle)`
///
/// The last cycle releases the remainder, e.g. 30% per cycle gives 30, 30, 30, 10. Returns 0 once
/// everything was released.
pub fn calculate_cycle_release_percent(release_percent: PercentX100000, cycle: Cycle) -> PercentX100000 {
	let remaining = ONE_HUNDRED_PERCENT - calculate_released_percent(release_percent, cycle);
	release_percent.min(remaining)
}

/// Function calculates offset of the next release from the start of vesting, in hours.
///
/// `offset = interval * (cycle + 1)`
pub fn calculate_release_offset_hours(release_interval_hours: u32, cycle: Cycle) -> Result<u64, MathError> {
	(release_interval_hours as u64)
		.checked_mul(cycle as u64 + 1)
		.ok_or(MathError::Overflow)
}

/// Function calculates `percent` of `amount`, rounded down.
pub fn calculate_percent_of(amount: Balance, percent: PercentX100000) -> Result<Balance, MathError> {
	ensure!(percent <= ONE_HUNDRED_PERCENT, MathError::PercentOutOfRange);

	if percent == ONE_HUNDRED_PERCENT {
		return Ok(amount);
	}

	sp_arithmetic::helpers_128bit::multiply_by_rational_with_rounding(
		amount,
		percent as u128,
		ONE_HUNDRED_PERCENT as u128,
		Rounding::Down,
	)
	.ok_or(MathError::Overflow)
}

/// Function calculates amount released by the cycle following `cycle` previous releases.
///
/// Amount is derived from the cumulative target so rounding never leaves dust behind: the last
/// cycle pays whatever is left of `entitlement`.
///
/// Parameters:
/// - `entitlement`: max. amount which can ever be paid out
/// - `already_paid`: amount paid out so far
/// - `release_percent`: percentage released per cycle
/// - `cycle`: number of releases done so far
pub fn calculate_cycle_release_amount(
	entitlement: Balance,
	already_paid: Balance,
	release_percent: PercentX100000,
	cycle: Cycle,
) -> Result<Balance, MathError> {
	ensure_release_percent(release_percent)?;

	let cycle = cycle.checked_add(1).ok_or(MathError::Overflow)?;
	let cumulative_percent = calculate_released_percent(release_percent, cycle);
	let target = calculate_percent_of(entitlement, cumulative_percent)?;

	Ok(target.saturating_sub(already_paid))
}
