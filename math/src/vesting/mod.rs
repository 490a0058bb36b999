mod math;

pub use math::*;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod tests;
