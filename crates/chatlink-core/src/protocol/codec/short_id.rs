//! Cases whose id travels as a 16-bit signed integer (LE).

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::WireFormat;
use crate::error::Result;
use crate::link::{RecipeLink, SkillLink};

impl WireFormat for SkillLink {
    const MIN_PAYLOAD: usize = 2;

    fn read_payload(buf: &mut Bytes) -> Result<Self> {
        Ok(SkillLink {
            skill_id: buf.get_i16_le().into(),
        })
    }

    // Constructors keep the id within i16, so the narrowing cast is lossless.
    fn write_payload(&self, out: &mut BytesMut) {
        out.put_i16_le(self.skill_id as i16);
    }
}

impl WireFormat for RecipeLink {
    const MIN_PAYLOAD: usize = 2;

    fn read_payload(buf: &mut Bytes) -> Result<Self> {
        Ok(RecipeLink {
            recipe_id: buf.get_i16_le().into(),
        })
    }

    fn write_payload(&self, out: &mut BytesMut) {
        out.put_i16_le(self.recipe_id as i16);
    }
}
