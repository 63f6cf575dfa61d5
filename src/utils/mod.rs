pub mod datetime;
pub mod number;
pub mod random_code;
pub mod validate;

pub use datetime::{format_datetime, parse_datetime};
pub use number::round2;
pub use random_code::generate_unique_comment_id;
