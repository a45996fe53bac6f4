//! Coin: `quantity` u32 LE.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::WireFormat;
use crate::error::Result;
use crate::link::CoinLink;

impl WireFormat for CoinLink {
    const MIN_PAYLOAD: usize = 4;

    fn read_payload(buf: &mut Bytes) -> Result<Self> {
        Ok(CoinLink {
            quantity: buf.get_u32_le(),
        })
    }

    fn write_payload(&self, out: &mut BytesMut) {
        out.put_u32_le(self.quantity);
    }
}
