//! DNS wire format: request decoding and uncompressed response encoding.

mod message;
mod name;
pub mod record;

pub use message::{
    decode_message, decode_query, encode_error_response, encode_response, HEADER_LEN,
};
pub use name::{decode_name, encode_name, write_name};
pub use record::encode_record;
