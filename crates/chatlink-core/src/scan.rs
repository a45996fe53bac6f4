//! Find chat links embedded in free-form chat text.
//!
//! A candidate is `[&` followed by Base64 alphabet characters and a closing
//! `]`. Each candidate is decoded independently; a bad token is reported in
//! place and does not stop the scan.

use std::ops::Range;

use crate::error::Result;
use crate::facade::ChatLinks;
use crate::link::ChatLink;
use crate::protocol::envelope::{CLOSE, OPEN};

/// One `[&...]` token found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLink<'a> {
    /// Byte range of the token in the message, brackets included.
    pub range: Range<usize>,
    pub text: &'a str,
    pub link: Result<ChatLink>,
}

/// Iterator over the tokens of one message.
pub struct Scanner<'a> {
    links: &'a ChatLinks,
    message: &'a str,
    pos: usize,
}

fn is_base64_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScannedLink<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(found) = self.message.get(self.pos..)?.find(OPEN) {
            let start = self.pos + found;
            let body_start = start + OPEN.len();
            let rest = self.message.get(body_start..).unwrap_or_default();
            let body_len = rest.bytes().take_while(|b| is_base64_char(*b)).count();

            if rest.get(body_len..).is_some_and(|r| r.starts_with(CLOSE)) {
                let end = body_start + body_len + CLOSE.len_utf8();
                self.pos = end;
                let text = self.message.get(start..end)?;
                return Some(ScannedLink {
                    range: start..end,
                    text,
                    link: self.links.decode(text),
                });
            }

            // Not a token; resume right after this `[&`.
            self.pos = body_start;
        }
        self.pos = self.message.len();
        None
    }
}

impl ChatLinks {
    pub fn scan<'a>(&'a self, message: &'a str) -> Scanner<'a> {
        Scanner {
            links: self,
            message,
            pos: 0,
        }
    }
}

/// Scan with the standard decoder.
///
/// ```
/// use chatlink_core::{scan, ChatLink};
///
/// let found: Vec<_> = scan("wts [&ATkwAAA=] pst").collect();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].range, 4..15);
/// assert!(matches!(found[0].link, Ok(ChatLink::Coin(_))));
/// ```
pub fn scan(message: &str) -> Scanner<'_> {
    crate::facade::standard().scan(message)
}
