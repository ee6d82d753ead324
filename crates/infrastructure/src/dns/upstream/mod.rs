mod doh_json;

pub use doh_json::{parse_json_answer, DohJsonResolver};
