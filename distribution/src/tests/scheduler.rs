use super::*;
use crate::{DistributionError, VestingSchedule, VestingScheduler};
use contract_variant::KeyedVariantList;
use pretty_assertions::assert_eq;

fn distributions(context: &crate::VestingContext) -> Vec<&str> {
	context.distributions().collect()
}

#[test]
fn find_next_should_release_earliest_distribution_first() {
	let mut scheduler = VestingScheduler::new(&schedules(&[("a", 24, 50_000), ("b", 48, 100_000)]));

	let first = scheduler.find_next(t0()).unwrap();

	assert_eq!(first.release_time(), hours_after_t0(24));
	assert_eq!(distributions(&first), vec!["a"]);
	assert_eq!(first.release("a").unwrap().cycle(), 1);
	assert_eq!(scheduler.remaining_cycles("a"), Some(1));
	assert_eq!(scheduler.remaining_cycles("b"), Some(1));

	let second = scheduler.find_next(t0()).unwrap();

	assert_eq!(second.release_time(), hours_after_t0(48));
	assert_eq!(distributions(&second), vec!["a", "b"]);
	assert!(second.release("a").unwrap().is_final_release());
	assert!(second.release("b").unwrap().is_final_release());
	assert!(scheduler.is_exhausted());
}

#[test]
fn find_next_should_only_advance_included_trackers() {
	let mut scheduler = VestingScheduler::new(&schedules(&[("a", 24, 25_000), ("b", 72, 50_000)]));

	scheduler.find_next(t0()).unwrap();
	scheduler.find_next(t0()).unwrap();

	let cycles: Vec<u16> = scheduler.trackers().values().map(|tracker| tracker.cycle()).collect();
	assert_eq!(cycles, vec![2, 0]);
}

#[test]
fn find_next_should_return_empty_context_when_exhausted() {
	let mut scheduler = VestingScheduler::new(&schedules(&[("a", 24, 100_000)]));
	scheduler.find_next(t0()).unwrap();

	let context = scheduler.find_next(t0()).unwrap();

	assert!(context.is_empty());
	assert_eq!(context.release_time(), t0());
}

#[test]
fn immediate_schedules_should_release_at_start() {
	let mut schedules = KeyedVariantList::new();
	schedules.upsert("main", VestingSchedule::immediate());
	schedules.upsert("bonus", VestingSchedule::immediate());
	let mut scheduler = VestingScheduler::new(&schedules);

	let context = scheduler.find_next(t0()).unwrap();

	assert_eq!(context.release_time(), t0());
	assert_eq!(distributions(&context), vec!["main", "bonus"]);
	assert_eq!(context.release("main").unwrap().released_percent(), 100_000);
	assert!(scheduler.is_exhausted());
}

#[test]
fn context_for_cycle_should_match_repeated_find_next() {
	let scheduler = VestingScheduler::new(&schedules(&[("a", 24, 50_000), ("b", 48, 100_000)]));
	let mut stepped = scheduler.clone();
	stepped.find_next(t0()).unwrap();
	let expected = stepped.find_next(t0()).unwrap();

	assert_eq!(scheduler.context_for_cycle(2, t0()), Ok(expected));
	// scheduler itself is not advanced
	assert_eq!(scheduler.remaining_cycles("a"), Some(2));
	assert_eq!(
		scheduler.context_for_cycle(1, t0()).unwrap().release_time(),
		hours_after_t0(24)
	);
}

#[test]
fn context_for_cycle_should_fail_beyond_exhaustion() {
	let scheduler = VestingScheduler::new(&schedules(&[("a", 24, 50_000), ("b", 48, 100_000)]));

	assert_eq!(
		scheduler.context_for_cycle(3, t0()),
		Err(DistributionError::CycleOutOfRange)
	);
	assert_eq!(
		scheduler.context_for_cycle(0, t0()),
		Err(DistributionError::CycleOutOfRange)
	);
}

#[test]
fn timeline_should_list_all_releases() {
	let scheduler = VestingScheduler::new(&schedules(&[("a", 24, 30_000), ("b", 36, 50_000)]));

	let timeline = scheduler.timeline(t0()).unwrap();

	let summary: Vec<(i64, Vec<&str>)> = timeline
		.iter()
		.map(|context| ((context.release_time().micros() - t0().micros()) / HOUR, distributions(context)))
		.collect();
	assert_eq!(
		summary,
		vec![
			(24, vec!["a"]),
			(36, vec!["b"]),
			(48, vec!["a"]),
			(72, vec!["a", "b"]),
			(96, vec!["a"]),
		]
	);
}

#[test]
fn reset_should_restart_vesting() {
	let mut scheduler = VestingScheduler::new(&schedules(&[("a", 24, 100_000)]));
	scheduler.find_next(t0()).unwrap();
	assert!(scheduler.is_exhausted());

	scheduler.reset();

	assert!(!scheduler.is_exhausted());
	assert_eq!(scheduler.remaining_cycles("a"), Some(1));
	assert_eq!(scheduler.remaining_cycles("missing"), None);
}

#[test]
fn find_next_should_fail_when_release_time_is_out_of_range() {
	let start = contract_primitives::TimePoint::MAX;
	let mut scheduler = VestingScheduler::new(&schedules(&[("a", 24, 100_000)]));

	assert!(matches!(scheduler.find_next(start), Err(DistributionError::Time(_))));
}
