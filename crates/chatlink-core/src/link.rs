//! Chat-link value model.
//!
//! `ChatLink` is a plain sum type with one immutable payload struct per case.
//! Fields are read through accessors; values are built either by decoding or
//! by the validated constructors, so every value in hand is encodable.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::Serialize;

use crate::error::{ChatLinkError, Result};
use crate::protocol::{envelope, Header};

/// A decoded chat link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatLink {
    Coin(CoinLink),
    Item(ItemLink),
    Dialog(DialogLink),
    PointOfInterest(PointOfInterestLink),
    Skill(SkillLink),
    Trait(TraitLink),
    Recipe(RecipeLink),
    Skin(SkinLink),
    Outfit(OutfitLink),
}

impl ChatLink {
    /// Header byte this value is written with.
    pub fn header(&self) -> Header {
        match self {
            ChatLink::Coin(_) => CoinLink::HEADER,
            ChatLink::Item(_) => ItemLink::HEADER,
            ChatLink::Dialog(_) => DialogLink::HEADER,
            ChatLink::PointOfInterest(_) => PointOfInterestLink::HEADER,
            ChatLink::Skill(_) => SkillLink::HEADER,
            ChatLink::Trait(_) => TraitLink::HEADER,
            ChatLink::Recipe(_) => RecipeLink::HEADER,
            ChatLink::Skin(_) => SkinLink::HEADER,
            ChatLink::Outfit(_) => OutfitLink::HEADER,
        }
    }

    /// Stable lowercase case name (matches the serialized `kind` tag).
    pub fn kind(&self) -> &'static str {
        match self {
            ChatLink::Coin(_) => CoinLink::KIND,
            ChatLink::Item(_) => ItemLink::KIND,
            ChatLink::Dialog(_) => DialogLink::KIND,
            ChatLink::PointOfInterest(_) => PointOfInterestLink::KIND,
            ChatLink::Skill(_) => SkillLink::KIND,
            ChatLink::Trait(_) => TraitLink::KIND,
            ChatLink::Recipe(_) => RecipeLink::KIND,
            ChatLink::Skin(_) => SkinLink::KIND,
            ChatLink::Outfit(_) => OutfitLink::KIND,
        }
    }

    /// Raw wire bytes (header included).
    pub fn to_bytes(&self) -> Bytes {
        crate::dispatch::encode(self)
    }

    /// Narrow to a concrete case, `None` on mismatch.
    pub fn into_case<T: LinkCase>(self) -> Option<T> {
        T::narrow(self)
    }
}

impl fmt::Display for ChatLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&envelope::to_text(&self.to_bytes()))
    }
}

impl FromStr for ChatLink {
    type Err = ChatLinkError;

    fn from_str(s: &str) -> Result<Self> {
        crate::facade::decode(s)
    }
}

/// Implemented by every case payload; ties a struct to its header and enum case.
pub trait LinkCase: Sized + Into<ChatLink> {
    const HEADER: Header;
    const KIND: &'static str;

    fn narrow(link: ChatLink) -> Option<Self>;
}

macro_rules! link_case {
    ($ty:ident, $variant:ident, $header:ident, $kind:literal) => {
        impl LinkCase for $ty {
            const HEADER: Header = Header::$header;
            const KIND: &'static str = $kind;

            fn narrow(link: ChatLink) -> Option<Self> {
                match link {
                    ChatLink::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for ChatLink {
            fn from(v: $ty) -> Self {
                ChatLink::$variant(v)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&ChatLink::from(*self), f)
            }
        }
    };
}

link_case!(CoinLink, Coin, Coin, "coin");
link_case!(ItemLink, Item, Item, "item");
link_case!(DialogLink, Dialog, Text, "dialog");
link_case!(PointOfInterestLink, PointOfInterest, Map, "point_of_interest");
link_case!(SkillLink, Skill, Skill, "skill");
link_case!(TraitLink, Trait, Trait, "trait");
link_case!(RecipeLink, Recipe, Recipe, "recipe");
link_case!(SkinLink, Skin, Skin, "skin");
link_case!(OutfitLink, Outfit, Outfit, "outfit");

fn fit_i16(field: &'static str, value: i32) -> Result<i32> {
    if i16::try_from(value).is_err() {
        return Err(ChatLinkError::range(
            field,
            value.into(),
            i16::MIN.into(),
            i16::MAX.into(),
        ));
    }
    Ok(value)
}

/// An amount of currency, in copper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CoinLink {
    pub(crate) quantity: u32,
}

impl CoinLink {
    pub fn new(quantity: u32) -> Self {
        Self { quantity }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// An item stack, optionally upgraded and transmuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ItemLink {
    pub(crate) item_id: i32,
    /// Stack size. Constructors enforce `1..=255`; decoded values carry the raw byte.
    pub(crate) quantity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) suffix_item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) secondary_suffix_item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) skin_id: Option<i32>,
    /// Flag bits with no known meaning, kept so they survive a round trip.
    #[serde(skip_serializing_if = "is_zero")]
    pub(crate) unknown_flags: u8,
}

fn is_zero(v: &u8) -> bool {
    *v == 0
}

impl ItemLink {
    pub fn builder(item_id: i32) -> ItemLinkBuilder {
        ItemLinkBuilder {
            item_id,
            quantity: 1,
            suffix_item_id: None,
            secondary_suffix_item_id: None,
            skin_id: None,
        }
    }

    pub fn item_id(&self) -> i32 {
        self.item_id
    }

    pub fn quantity(&self) -> u8 {
        self.quantity
    }

    pub fn suffix_item_id(&self) -> Option<i32> {
        self.suffix_item_id
    }

    pub fn secondary_suffix_item_id(&self) -> Option<i32> {
        self.secondary_suffix_item_id
    }

    pub fn skin_id(&self) -> Option<i32> {
        self.skin_id
    }

    pub fn unknown_flags(&self) -> u8 {
        self.unknown_flags
    }
}

/// Builder for `ItemLink`; `build` validates the quantity.
#[derive(Debug, Clone)]
pub struct ItemLinkBuilder {
    item_id: i32,
    quantity: u32,
    suffix_item_id: Option<i32>,
    secondary_suffix_item_id: Option<i32>,
    skin_id: Option<i32>,
}

impl ItemLinkBuilder {
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn suffix(mut self, item_id: i32) -> Self {
        self.suffix_item_id = Some(item_id);
        self
    }

    pub fn secondary_suffix(mut self, item_id: i32) -> Self {
        self.secondary_suffix_item_id = Some(item_id);
        self
    }

    pub fn skin(mut self, skin_id: i32) -> Self {
        self.skin_id = Some(skin_id);
        self
    }

    pub fn build(self) -> Result<ItemLink> {
        let quantity = match u8::try_from(self.quantity) {
            Ok(q) if q >= 1 => q,
            _ => {
                return Err(ChatLinkError::range(
                    "quantity",
                    self.quantity.into(),
                    1,
                    u8::MAX.into(),
                ))
            }
        };
        Ok(ItemLink {
            item_id: self.item_id,
            quantity,
            suffix_item_id: self.suffix_item_id,
            secondary_suffix_item_id: self.secondary_suffix_item_id,
            skin_id: self.skin_id,
            unknown_flags: 0,
        })
    }
}

/// A skill. Carried as 16 bits on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SkillLink {
    pub(crate) skill_id: i32,
}

impl SkillLink {
    pub fn new(skill_id: i32) -> Result<Self> {
        Ok(Self {
            skill_id: fit_i16("skill_id", skill_id)?,
        })
    }

    pub fn skill_id(&self) -> i32 {
        self.skill_id
    }
}

/// A crafting recipe. Carried as 16 bits on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RecipeLink {
    pub(crate) recipe_id: i32,
}

impl RecipeLink {
    pub fn new(recipe_id: i32) -> Result<Self> {
        Ok(Self {
            recipe_id: fit_i16("recipe_id", recipe_id)?,
        })
    }

    pub fn recipe_id(&self) -> i32 {
        self.recipe_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TraitLink {
    pub(crate) trait_id: i32,
}

impl TraitLink {
    pub fn new(trait_id: i32) -> Self {
        Self { trait_id }
    }

    pub fn trait_id(&self) -> i32 {
        self.trait_id
    }
}

/// A wardrobe skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SkinLink {
    pub(crate) skin_id: i32,
}

impl SkinLink {
    pub fn new(skin_id: i32) -> Self {
        Self { skin_id }
    }

    pub fn skin_id(&self) -> i32 {
        self.skin_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OutfitLink {
    pub(crate) outfit_id: i32,
}

impl OutfitLink {
    pub fn new(outfit_id: i32) -> Self {
        Self { outfit_id }
    }

    pub fn outfit_id(&self) -> i32 {
        self.outfit_id
    }
}

/// A line of NPC dialog (wire header `Text`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DialogLink {
    pub(crate) dialog_id: i32,
}

impl DialogLink {
    pub fn new(dialog_id: i32) -> Self {
        Self { dialog_id }
    }

    pub fn dialog_id(&self) -> i32 {
        self.dialog_id
    }
}

/// A waypoint, landmark or vista (wire header `Map`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PointOfInterestLink {
    pub(crate) point_of_interest_id: i32,
}

impl PointOfInterestLink {
    pub fn new(point_of_interest_id: i32) -> Self {
        Self {
            point_of_interest_id,
        }
    }

    pub fn point_of_interest_id(&self) -> i32 {
        self.point_of_interest_id
    }
}
