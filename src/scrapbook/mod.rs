mod grouper;

pub use grouper::{flatten, group_by_date};
