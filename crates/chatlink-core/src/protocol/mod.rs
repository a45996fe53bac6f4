//! Wire-level modules: the `[&...]` text envelope and the per-case binary codecs.
//!
//! A decoded chat link is `header || payload`:
//! - byte 0 is the `Header`, selecting exactly one case;
//! - the payload layout is owned by that case's codec (all integers LE).
//!
//! All parsers are panic-free: short or malformed input is reported as
//! `ChatLinkError` instead of indexing raw buffers.

pub mod codec;
pub mod envelope;

use std::fmt;

/// Header byte values understood by the game client.
///
/// `Match` and `Player` are reserved: the client emits them, but no payload
/// layout is known, so no codec is registered for them.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Header {
    Coin = 0x01,
    Item = 0x02,
    /// NPC dialog text.
    Text = 0x03,
    /// Map point of interest (waypoint, landmark, vista).
    Map = 0x04,
    Match = 0x05,
    Skill = 0x07,
    Trait = 0x08,
    Player = 0x09,
    Recipe = 0x0A,
    Skin = 0x0B,
    Outfit = 0x0C,
}

impl Header {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x01 => Some(Header::Coin),
            0x02 => Some(Header::Item),
            0x03 => Some(Header::Text),
            0x04 => Some(Header::Map),
            0x05 => Some(Header::Match),
            0x07 => Some(Header::Skill),
            0x08 => Some(Header::Trait),
            0x09 => Some(Header::Player),
            0x0A => Some(Header::Recipe),
            0x0B => Some(Header::Skin),
            0x0C => Some(Header::Outfit),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:#04x})", self, self.as_u8())
    }
}
