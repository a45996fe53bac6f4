//! Header-based routing between wire buffers and case codecs.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::{Buf, Bytes};

use crate::error::{ChatLinkError, Result};
use crate::link::{
    ChatLink, CoinLink, DialogLink, ItemLink, OutfitLink, PointOfInterestLink, RecipeLink,
    SkillLink, SkinLink, TraitLink,
};
use crate::options::TrailingBytes;
use crate::protocol::codec::{encode_case, CaseCodec, VariantCodec};

/// Header -> codec mapping. Built once, then handed to a `Dispatcher`.
#[derive(Default, Clone)]
pub struct CodecTable {
    by_header: HashMap<u8, Arc<dyn VariantCodec>>,
}

impl CodecTable {
    /// Empty table; populate with `register`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every case the client is known to emit with a confirmed layout.
    pub fn standard() -> Self {
        let codecs: [Arc<dyn VariantCodec>; 9] = [
            Arc::new(CaseCodec::<CoinLink>::new()),
            Arc::new(CaseCodec::<ItemLink>::new()),
            Arc::new(CaseCodec::<DialogLink>::new()),
            Arc::new(CaseCodec::<PointOfInterestLink>::new()),
            Arc::new(CaseCodec::<SkillLink>::new()),
            Arc::new(CaseCodec::<TraitLink>::new()),
            Arc::new(CaseCodec::<RecipeLink>::new()),
            Arc::new(CaseCodec::<SkinLink>::new()),
            Arc::new(CaseCodec::<OutfitLink>::new()),
        ];
        let by_header = codecs
            .into_iter()
            .map(|c| (c.header().as_u8(), c))
            .collect();
        Self { by_header }
    }

    /// Register a codec under its header. A header may be registered only once.
    pub fn register(&mut self, codec: Arc<dyn VariantCodec>) -> Result<()> {
        let header = codec.header().as_u8();
        if self.by_header.contains_key(&header) {
            return Err(ChatLinkError::DuplicateHeader(header));
        }
        self.by_header.insert(header, codec);
        Ok(())
    }

    pub fn get(&self, header: u8) -> Option<&Arc<dyn VariantCodec>> {
        self.by_header.get(&header)
    }

    /// Registered headers, ascending.
    pub fn headers(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self.by_header.keys().copied().collect();
        out.sort_unstable();
        out
    }

    pub fn len(&self) -> usize {
        self.by_header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_header.is_empty()
    }
}

/// Routes decoded buffers to the codec registered for their header.
///
/// The table is owned and never mutated after construction, so a shared
/// `Dispatcher` needs no locking.
#[derive(Clone)]
pub struct Dispatcher {
    table: CodecTable,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

impl Dispatcher {
    pub fn new(table: CodecTable) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(CodecTable::standard())
    }

    pub fn registered_headers(&self) -> Vec<u8> {
        self.table.headers()
    }

    pub fn decode(&self, buf: Bytes, trailing: TrailingBytes) -> Result<ChatLink> {
        let Some(&header) = buf.chunk().first() else {
            tracing::debug!("empty chat link buffer");
            return Err(ChatLinkError::Truncated {
                kind: "chat",
                need: 1,
                got: 0,
            });
        };

        let codec = self.table.get(header).ok_or_else(|| {
            tracing::debug!(header, len = buf.len(), "no codec for header");
            ChatLinkError::UnknownVariant(header)
        })?;

        tracing::trace!(header = %codec.header(), len = buf.len(), "dispatch");
        codec.decode(buf, trailing)
    }

    /// Encode through the codec registered for the value's case.
    ///
    /// A table without that case yields `UnknownVariant`, so whatever this
    /// dispatcher renders it can also decode.
    pub fn encode(&self, link: &ChatLink) -> Result<Bytes> {
        let header = link.header();
        self.table
            .get(header.as_u8())
            .and_then(|codec| codec.encode(link))
            .ok_or_else(|| {
                tracing::debug!(header = %header, "no codec registered for case");
                ChatLinkError::UnknownVariant(header.as_u8())
            })
    }
}

/// Wire bytes for a value, header included, by the built-in codec for its case.
pub fn encode(link: &ChatLink) -> Bytes {
    match link {
        ChatLink::Coin(v) => encode_case(v),
        ChatLink::Item(v) => encode_case(v),
        ChatLink::Dialog(v) => encode_case(v),
        ChatLink::PointOfInterest(v) => encode_case(v),
        ChatLink::Skill(v) => encode_case(v),
        ChatLink::Trait(v) => encode_case(v),
        ChatLink::Recipe(v) => encode_case(v),
        ChatLink::Skin(v) => encode_case(v),
        ChatLink::Outfit(v) => encode_case(v),
    }
}
