//! Value normalization for tag values.
//!
//! - **street**: street-type suffix expansion (`Main St` -> `Main Street`)
//! - **ordinal**: ordinal number spelling (`5th` -> `Fifth`)
//! - **postcode**: five-digit postcode extraction (`NY 10001` -> `10001`)
//!
//! Each function reports "nothing to do" through `Option` rather than
//! swallowing errors, so callers decide what an unchanged value means.

pub mod ordinal;
pub mod postcode;
pub mod street;

pub use ordinal::spell_out_ordinal;
pub use postcode::extract_postcode;
pub use street::{expand_street_suffix, normalize_street_name, street_type};
