//! Cases whose whole payload is a single 32-bit signed id (LE).

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::WireFormat;
use crate::error::Result;
use crate::link::{DialogLink, OutfitLink, PointOfInterestLink, SkinLink, TraitLink};

macro_rules! i32_id {
    ($ty:ident, $field:ident) => {
        impl WireFormat for $ty {
            const MIN_PAYLOAD: usize = 4;

            fn read_payload(buf: &mut Bytes) -> Result<Self> {
                Ok($ty {
                    $field: buf.get_i32_le(),
                })
            }

            fn write_payload(&self, out: &mut BytesMut) {
                out.put_i32_le(self.$field);
            }
        }
    };
}

i32_id!(TraitLink, trait_id);
i32_id!(SkinLink, skin_id);
i32_id!(OutfitLink, outfit_id);
i32_id!(DialogLink, dialog_id);
i32_id!(PointOfInterestLink, point_of_interest_id);
