//! Connection to the marketplace node.
//!
//! Two surfaces, both carrying opaque parameter buffers:
//! - [`NodeClient::submit_call`] submits a state-changing call and
//!   returns the operation id the node assigned to it.
//! - [`NodeClient::read_call`] executes a read-only call and returns the
//!   raw return buffer for the caller to decode.
//!
//! The client never inspects parameter bytes; gas, coins and fee are
//! plumbed through as metadata.

use std::fmt;

use bytes::{BufMut, BytesMut};
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::frame::{self, RequestFrame, ResponseFrame, KIND_CALL, KIND_READ};

/// Failures from the node surface.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("node i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("node rejected the request: {0}")]
    Rejected(String),

    #[error("malformed node response: {0}")]
    Malformed(&'static str),

    #[error("node closed the connection")]
    Disconnected,
}

/// Identifier the node assigns to an accepted call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationId(pub String);

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata and parameter buffer for a state-changing call.
#[derive(Debug, Clone)]
pub struct CallRequest {
    pub target: String,
    pub function: String,
    pub parameter: Vec<u8>,
    pub max_gas: u64,
    pub coins: u64,
    pub fee: u64,
}

/// Metadata and parameter buffer for a read-only call.
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub target: String,
    pub function: String,
    pub parameter: Vec<u8>,
    pub max_gas: u64,
}

/// One TCP connection to the node, with owned read/write buffers.
pub struct NodeClient {
    stream: TcpStream,
    read_buffer: BytesMut,
    write_buffer: BytesMut,
}

impl NodeClient {
    pub async fn connect(addr: &str) -> Result<Self, NodeError> {
        info!("connecting to node at {}", addr);
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        Ok(NodeClient {
            stream,
            read_buffer: BytesMut::with_capacity(65536),
            write_buffer: BytesMut::with_capacity(65536),
        })
    }

    /// Submit a state-changing call; returns the assigned operation id.
    pub async fn submit_call(&mut self, req: CallRequest) -> Result<OperationId, NodeError> {
        let frame = RequestFrame {
            kind: KIND_CALL,
            target: req.target,
            function: req.function,
            max_gas: req.max_gas,
            coins: req.coins,
            fee: req.fee,
            parameter: req.parameter,
        };
        let payload = self.round_trip(&frame).await?;
        let id = String::from_utf8(payload)
            .map_err(|_| NodeError::Malformed("operation id is not UTF-8"))?;
        Ok(OperationId(id))
    }

    /// Execute a read-only call; returns the raw return buffer.
    pub async fn read_call(&mut self, req: ReadRequest) -> Result<Vec<u8>, NodeError> {
        let frame = RequestFrame {
            kind: KIND_READ,
            target: req.target,
            function: req.function,
            max_gas: req.max_gas,
            coins: 0,
            fee: 0,
            parameter: req.parameter,
        };
        self.round_trip(&frame).await
    }

    async fn round_trip(&mut self, frame: &RequestFrame) -> Result<Vec<u8>, NodeError> {
        self.send_frame(frame).await?;
        match self.read_frame().await? {
            ResponseFrame::Accepted(payload) => Ok(payload),
            ResponseFrame::Rejected(msg) => Err(NodeError::Rejected(msg)),
        }
    }

    async fn send_frame(&mut self, frame: &RequestFrame) -> Result<(), NodeError> {
        let mut payload = BytesMut::new();
        frame::encode_request(frame, &mut payload);

        self.write_buffer.clear();
        self.write_buffer.put_u32_le(payload.len() as u32);
        self.write_buffer.extend_from_slice(&payload);

        self.stream.write_all(&self.write_buffer).await?;
        self.stream.flush().await?;

        debug!("sent {} ({} byte payload)", frame.function, payload.len());
        Ok(())
    }

    async fn read_frame(&mut self) -> Result<ResponseFrame, NodeError> {
        // Read length prefix
        while self.read_buffer.len() < 4 {
            let mut buf = [0u8; 4096];
            let n = self.stream.read(&mut buf).await?;
            if n == 0 {
                return Err(NodeError::Disconnected);
            }
            self.read_buffer.extend_from_slice(&buf[..n]);
        }

        let len = u32::from_le_bytes([
            self.read_buffer[0],
            self.read_buffer[1],
            self.read_buffer[2],
            self.read_buffer[3],
        ]) as usize;

        // Read response body
        while self.read_buffer.len() < 4 + len {
            let mut buf = [0u8; 4096];
            let n = self.stream.read(&mut buf).await?;
            if n == 0 {
                return Err(NodeError::Disconnected);
            }
            self.read_buffer.extend_from_slice(&buf[..n]);
        }

        let frame_bytes = self.read_buffer.split_to(4 + len);
        frame::decode_response(&frame_bytes[4..])
    }
}
