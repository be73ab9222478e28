//! Decode the header and payload of a JSON Web Token without verifying it.
//!
//! The signature segment is split off and ignored. Only the payload is ever
//! rendered; the header is parsed so that a malformed token is rejected.

pub mod error;
mod input;
pub mod token;

pub use error::{DecodeError, Result, Segment};
pub use input::{read_token, run};
pub use token::{Claims, DecodedToken, SEGMENT_COUNT, decode_token, render_payload};
