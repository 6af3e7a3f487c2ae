mod provenance;
mod range_bound;

pub use provenance::Provenance;
pub use range_bound::{BoundPair, RangeBound, LIFE_SPAN_PREFIX_LEN};
