//! Item: `quantity` u8, `item_id` i32 LE, `flags` u8, then one i32 LE per
//! set flag bit, in bit order (suffix, secondary suffix, skin).

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::WireFormat;
use crate::error::{ChatLinkError, Result};
use crate::link::{ItemLink, LinkCase};

/// Item flag: suffix (upgrade) item id (i32) is present.
pub const ITEM_FLAG_SUFFIX: u8 = 0x01;
/// Item flag: secondary suffix item id (i32) is present.
pub const ITEM_FLAG_SECONDARY_SUFFIX: u8 = 0x02;
/// Item flag: skin id (i32) is present.
pub const ITEM_FLAG_SKIN: u8 = 0x04;

const KNOWN_FLAGS: u8 = ITEM_FLAG_SUFFIX | ITEM_FLAG_SECONDARY_SUFFIX | ITEM_FLAG_SKIN;

impl ItemLink {
    /// Flags byte as written on the wire.
    pub fn flags(&self) -> u8 {
        let mut flags = self.unknown_flags & !KNOWN_FLAGS;
        if self.suffix_item_id.is_some() {
            flags |= ITEM_FLAG_SUFFIX;
        }
        if self.secondary_suffix_item_id.is_some() {
            flags |= ITEM_FLAG_SECONDARY_SUFFIX;
        }
        if self.skin_id.is_some() {
            flags |= ITEM_FLAG_SKIN;
        }
        flags
    }
}

impl WireFormat for ItemLink {
    const MIN_PAYLOAD: usize = 6;

    fn read_payload(buf: &mut Bytes) -> Result<Self> {
        let quantity = buf.get_u8();
        let item_id = buf.get_i32_le();
        let flags = buf.get_u8();

        let optional = (flags & KNOWN_FLAGS).count_ones() as usize;
        if buf.remaining() < optional * 4 {
            let need = 1 + Self::MIN_PAYLOAD + optional * 4;
            let got = 1 + Self::MIN_PAYLOAD + buf.remaining();
            tracing::debug!(flags, need, got, "item flags announce missing ids");
            return Err(ChatLinkError::Truncated {
                kind: Self::KIND,
                need,
                got,
            });
        }

        let suffix_item_id = (flags & ITEM_FLAG_SUFFIX != 0).then(|| buf.get_i32_le());
        let secondary_suffix_item_id =
            (flags & ITEM_FLAG_SECONDARY_SUFFIX != 0).then(|| buf.get_i32_le());
        let skin_id = (flags & ITEM_FLAG_SKIN != 0).then(|| buf.get_i32_le());

        Ok(ItemLink {
            item_id,
            quantity,
            suffix_item_id,
            secondary_suffix_item_id,
            skin_id,
            unknown_flags: flags & !KNOWN_FLAGS,
        })
    }

    fn write_payload(&self, out: &mut BytesMut) {
        out.put_u8(self.quantity);
        out.put_i32_le(self.item_id);
        out.put_u8(self.flags());
        for id in [
            self.suffix_item_id,
            self.secondary_suffix_item_id,
            self.skin_id,
        ]
        .into_iter()
        .flatten()
        {
            out.put_i32_le(id);
        }
    }
}
