pub mod amounts;
pub mod freshness;
pub mod identity;
pub mod status;

pub use amounts::{amount_min_max, detailed_bands, parse_amounts, AmountRange, FundingBucket};
pub use freshness::{days_since, freshness_label, parse_last_checked};
pub use identity::identity_key;
pub use status::StatusClass;
