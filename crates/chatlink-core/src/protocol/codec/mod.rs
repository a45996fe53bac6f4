//! Per-case binary codecs (panic-free).
//!
//! Parsing rules:
//! - Never index (`buf[0]`) — always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.
//! - All multi-byte integers are little-endian.

mod coin;
mod id;
mod item;
mod short_id;

use std::marker::PhantomData;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{ChatLinkError, Result};
use crate::link::{ChatLink, LinkCase};
use crate::options::TrailingBytes;
use crate::protocol::Header;

pub use item::{ITEM_FLAG_SECONDARY_SUFFIX, ITEM_FLAG_SKIN, ITEM_FLAG_SUFFIX};

/// Byte layout of one case's payload (everything after the header).
pub trait WireFormat: LinkCase {
    /// Payload bytes required after the header.
    const MIN_PAYLOAD: usize;

    /// Read the payload. `buf` holds at least `MIN_PAYLOAD` bytes.
    fn read_payload(buf: &mut Bytes) -> Result<Self>;

    fn write_payload(&self, out: &mut BytesMut);
}

/// Object-safe codec entry, one per registered header.
pub trait VariantCodec: Send + Sync {
    fn header(&self) -> Header;
    fn kind(&self) -> &'static str;
    /// Minimum wire length, header included.
    fn min_len(&self) -> usize;
    fn decode(&self, buf: Bytes, trailing: TrailingBytes) -> Result<ChatLink>;
    /// Wire bytes for `link`, `None` when it is not this codec's case.
    fn encode(&self, link: &ChatLink) -> Option<Bytes>;
}

/// `VariantCodec` for any `WireFormat` case.
pub struct CaseCodec<T>(PhantomData<fn() -> T>);

impl<T> CaseCodec<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for CaseCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WireFormat> VariantCodec for CaseCodec<T> {
    fn header(&self) -> Header {
        T::HEADER
    }

    fn kind(&self) -> &'static str {
        T::KIND
    }

    fn min_len(&self) -> usize {
        1 + T::MIN_PAYLOAD
    }

    fn decode(&self, buf: Bytes, trailing: TrailingBytes) -> Result<ChatLink> {
        decode_case::<T>(buf, trailing).map(Into::into)
    }

    fn encode(&self, link: &ChatLink) -> Option<Bytes> {
        T::narrow(*link).map(|v| encode_case(&v))
    }
}

/// Decode one case from a full wire buffer (header included).
pub fn decode_case<T: WireFormat>(mut buf: Bytes, trailing: TrailingBytes) -> Result<T> {
    let need = 1 + T::MIN_PAYLOAD;
    let got = buf.remaining();
    if got < need {
        tracing::debug!(kind = T::KIND, need, got, "chat link too short");
        return Err(ChatLinkError::Truncated {
            kind: T::KIND,
            need,
            got,
        });
    }

    let header = buf.get_u8();
    if header != T::HEADER.as_u8() {
        return Err(ChatLinkError::UnknownVariant(header));
    }

    let value = T::read_payload(&mut buf)?;

    let extra = buf.remaining();
    if extra > 0 {
        match trailing {
            TrailingBytes::Ignore => {
                tracing::trace!(kind = T::KIND, extra, "ignoring trailing bytes");
            }
            TrailingBytes::Reject => {
                tracing::debug!(kind = T::KIND, extra, "rejecting trailing bytes");
                return Err(ChatLinkError::TrailingData {
                    kind: T::KIND,
                    extra,
                });
            }
        }
    }

    Ok(value)
}

/// Encode one case to a full wire buffer (header included).
pub fn encode_case<T: WireFormat>(value: &T) -> Bytes {
    let mut out = BytesMut::with_capacity(1 + T::MIN_PAYLOAD + 12);
    out.put_u8(T::HEADER.as_u8());
    value.write_payload(&mut out);
    out.freeze()
}
