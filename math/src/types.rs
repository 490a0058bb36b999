/// Raw token amount used by release calculations. Asset amounts and NFT counts are widened to it.
pub type Balance = u128;

/// Percentage in fixed point, `100_000` is 100%.
pub type PercentX100000 = u32;

/// Release cycle counter.
pub type Cycle = u16;

pub const ONE_HUNDRED_PERCENT: PercentX100000 = 100_000;
