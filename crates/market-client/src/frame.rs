//! Frames exchanged with the marketplace node.
//!
//! Request payload layout:
//!
//! ```text
//! [0]     kind (0 = call, 1 = read)
//! [1..]   target address  (u32 LE length + UTF-8)
//! [..]    function name   (u32 LE length + UTF-8)
//! [..8]   max_gas (u64 LE)
//! [..8]   coins   (u64 LE, 0 for reads)
//! [..8]   fee     (u64 LE, 0 for reads)
//! [..4+n] parameter bytes (u32 LE length + raw)
//! ```
//!
//! Response payload layout:
//!
//! ```text
//! [0]   status (0 = accepted, 1 = rejected)
//! [1..] operation id / return buffer on accept, UTF-8 message on reject
//! ```
//!
//! Payloads travel behind a u32 LE length prefix on the wire; the
//! connection logic in [`crate::node`] owns that outer prefix.

use bytes::{BufMut, BytesMut};

use crate::node::NodeError;

pub const KIND_CALL: u8 = 0;
pub const KIND_READ: u8 = 1;

pub const STATUS_ACCEPTED: u8 = 0;
pub const STATUS_REJECTED: u8 = 1;

/// A call-submission or read request, ready to frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFrame {
    pub kind: u8,
    pub target: String,
    pub function: String,
    pub max_gas: u64,
    pub coins: u64,
    pub fee: u64,
    pub parameter: Vec<u8>,
}

/// Append the request payload (without the outer length prefix) to `out`.
pub fn encode_request(req: &RequestFrame, out: &mut BytesMut) {
    out.put_u8(req.kind);
    put_text(out, &req.target);
    put_text(out, &req.function);
    out.put_u64_le(req.max_gas);
    out.put_u64_le(req.coins);
    out.put_u64_le(req.fee);
    out.put_u32_le(req.parameter.len() as u32);
    out.extend_from_slice(&req.parameter);
}

fn put_text(out: &mut BytesMut, s: &str) {
    out.put_u32_le(s.len() as u32);
    out.extend_from_slice(s.as_bytes());
}

/// A node response: the accepted payload, or a rejection message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseFrame {
    Accepted(Vec<u8>),
    Rejected(String),
}

/// Parse a response payload (without the outer length prefix).
pub fn decode_response(buf: &[u8]) -> Result<ResponseFrame, NodeError> {
    let (&status, payload) = buf
        .split_first()
        .ok_or(NodeError::Malformed("empty response frame"))?;
    match status {
        STATUS_ACCEPTED => Ok(ResponseFrame::Accepted(payload.to_vec())),
        STATUS_REJECTED => {
            let msg = std::str::from_utf8(payload)
                .map_err(|_| NodeError::Malformed("rejection message is not UTF-8"))?;
            Ok(ResponseFrame::Rejected(msg.to_string()))
        }
        _ => Err(NodeError::Malformed("unknown response status")),
    }
}
