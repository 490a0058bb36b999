mod scheduler;

use crate::{DistributionOutcome, FungibleOutcome, NftOutcome, VestingSchedule};
use contract_primitives::{Asset, Symbol, TimePoint};
use contract_variant::KeyedVariantList;

pub(crate) const HOUR: i64 = 3_600_000_000;

pub(crate) fn eos(amount: i64) -> Asset {
	Asset::new(amount, Symbol::new(4, "EOS").unwrap()).unwrap()
}

pub(crate) fn t0() -> TimePoint {
	"2024-01-01T00:00:00".parse().unwrap()
}

pub(crate) fn hours_after_t0(hours: i64) -> TimePoint {
	TimePoint::from_micros(t0().micros() + hours * HOUR).unwrap()
}

pub(crate) fn fungible(prize: i64, minimum_payout: i64, early_exit_fee: i64) -> DistributionOutcome {
	FungibleOutcome::new(eos(prize), eos(minimum_payout), eos(early_exit_fee))
		.unwrap()
		.into()
}

pub(crate) fn nft(prize: u16, minimum_payout: u16, early_exit_fee: u16) -> DistributionOutcome {
	NftOutcome::new(prize, minimum_payout, early_exit_fee).unwrap().into()
}

pub(crate) fn schedules(entries: &[(&str, u32, u32)]) -> KeyedVariantList<VestingSchedule> {
	entries
		.iter()
		.map(|(name, interval, percent)| (*name, VestingSchedule::new(*interval, *percent).unwrap()))
		.collect()
}
