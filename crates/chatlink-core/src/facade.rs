//! Public entry points: text -> `ChatLink`, `ChatLink` -> text, and the
//! validated `encode_*` constructors.
//!
//! The free functions run against a lazily built standard `ChatLinks`.
//! Construct a `ChatLinks` directly to use a custom table or decode policy.

use std::sync::OnceLock;

use crate::dispatch::Dispatcher;
use crate::error::{ChatLinkError, Result};
use crate::link::{
    ChatLink, CoinLink, DialogLink, ItemLink, LinkCase, OutfitLink, PointOfInterestLink,
    RecipeLink, SkillLink, SkinLink, TraitLink,
};
use crate::options::DecodeOptions;
use crate::protocol::envelope;

/// Decoder/renderer bound to one dispatcher and one decode policy.
#[derive(Clone, Default)]
pub struct ChatLinks {
    dispatcher: Dispatcher,
    options: DecodeOptions,
}

impl ChatLinks {
    pub fn new(dispatcher: Dispatcher, options: DecodeOptions) -> Self {
        Self {
            dispatcher,
            options,
        }
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self::new(Dispatcher::standard(), options)
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn decode(&self, text: &str) -> Result<ChatLink> {
        if text.len() > self.options.max_token_len {
            return Err(ChatLinkError::Format(format!(
                "token is {} bytes, limit is {}",
                text.len(),
                self.options.max_token_len
            )));
        }
        let bytes = envelope::to_bytes(text)?;
        self.dispatcher.decode(bytes, self.options.trailing_bytes)
    }

    /// Decode and narrow. A different case is `Ok(None)`, not an error.
    pub fn decode_as<T: LinkCase>(&self, text: &str) -> Result<Option<T>> {
        Ok(T::narrow(self.decode(text)?))
    }

    /// Fails with `UnknownVariant` when this facade's table has no codec for the case.
    pub fn render(&self, link: &ChatLink) -> Result<String> {
        Ok(envelope::to_text(&self.dispatcher.encode(link)?))
    }
}

pub(crate) fn standard() -> &'static ChatLinks {
    static STANDARD: OnceLock<ChatLinks> = OnceLock::new();
    STANDARD.get_or_init(ChatLinks::default)
}

/// Decode a `[&...]` token (envelope characters optional).
pub fn decode(text: &str) -> Result<ChatLink> {
    standard().decode(text)
}

/// Decode a token expected to be of case `T`.
///
/// ```
/// use chatlink_core::{decode_as, CoinLink, SkillLink};
///
/// let skill = decode_as::<SkillLink>("[&BzkF]").unwrap().unwrap();
/// assert_eq!(skill.skill_id(), 1337);
/// assert!(decode_as::<CoinLink>("[&BzkF]").unwrap().is_none());
/// ```
pub fn decode_as<T: LinkCase>(text: &str) -> Result<Option<T>> {
    standard().decode_as(text)
}

/// Render with the built-in codecs; every case has one, so this cannot fail.
pub fn render(link: &ChatLink) -> String {
    envelope::to_text(&crate::dispatch::encode(link))
}

pub fn encode_coins(quantity: u32) -> CoinLink {
    CoinLink::new(quantity)
}

/// Item stack; `quantity` must be within `1..=255`.
pub fn encode_item(
    item_id: i32,
    quantity: u32,
    suffix_item_id: Option<i32>,
    secondary_suffix_item_id: Option<i32>,
    skin_id: Option<i32>,
) -> Result<ItemLink> {
    let mut b = ItemLink::builder(item_id).quantity(quantity);
    if let Some(id) = suffix_item_id {
        b = b.suffix(id);
    }
    if let Some(id) = secondary_suffix_item_id {
        b = b.secondary_suffix(id);
    }
    if let Some(id) = skin_id {
        b = b.skin(id);
    }
    b.build()
}

/// Skill ids must fit in 16 bits.
pub fn encode_skill(skill_id: i32) -> Result<SkillLink> {
    SkillLink::new(skill_id)
}

/// Recipe ids must fit in 16 bits.
pub fn encode_recipe(recipe_id: i32) -> Result<RecipeLink> {
    RecipeLink::new(recipe_id)
}

pub fn encode_trait(trait_id: i32) -> TraitLink {
    TraitLink::new(trait_id)
}

pub fn encode_skin(skin_id: i32) -> SkinLink {
    SkinLink::new(skin_id)
}

pub fn encode_outfit(outfit_id: i32) -> OutfitLink {
    OutfitLink::new(outfit_id)
}

pub fn encode_dialog(dialog_id: i32) -> DialogLink {
    DialogLink::new(dialog_id)
}

pub fn encode_point_of_interest(point_of_interest_id: i32) -> PointOfInterestLink {
    PointOfInterestLink::new(point_of_interest_id)
}
