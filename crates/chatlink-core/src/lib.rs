//! chatlink core: the chat-link wire codec, value model, and text envelope.
//!
//! A chat link is a short `[&...]` token wrapping a Base64 blob. The first
//! decoded byte is the header that selects a case (coin, item, skill, ...);
//! the rest is that case's little-endian payload. This crate carries no I/O
//! and no runtime so it can be embedded in chat clients, bots, and tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every malformed token surfaces as a `ChatLinkError`, never a crash.
//!
//! ```
//! use chatlink_core::{decode, encode_coins, ChatLink};
//!
//! let coins = encode_coins(12345);
//! let text = coins.to_string();
//! assert_eq!(text, "[&ATkwAAA=]");
//! assert_eq!(decode(&text).unwrap(), ChatLink::Coin(coins));
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod dispatch;
pub mod error;
pub mod facade;
pub mod link;
pub mod options;
pub mod protocol;
pub mod scan;

pub use dispatch::{CodecTable, Dispatcher};
pub use error::{ChatLinkError, ErrorCode, Result};
pub use facade::{
    decode, decode_as, encode_coins, encode_dialog, encode_item, encode_outfit,
    encode_point_of_interest, encode_recipe, encode_skill, encode_skin, encode_trait, render,
    ChatLinks,
};
pub use link::{
    ChatLink, CoinLink, DialogLink, ItemLink, ItemLinkBuilder, LinkCase, OutfitLink,
    PointOfInterestLink, RecipeLink, SkillLink, SkinLink, TraitLink,
};
pub use options::{DecodeOptions, TrailingBytes};
pub use protocol::Header;
pub use scan::{scan, ScannedLink, Scanner};
