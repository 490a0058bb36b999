mod list;

use contract_primitives::{Asset, Name, Symbol};

pub(crate) fn name(s: &str) -> Name {
	s.parse().unwrap()
}

pub(crate) fn eos(amount: i64) -> Asset {
	Asset::new(amount, Symbol::new(4, "EOS").unwrap()).unwrap()
}
