//! Command implementations. Each returns JSON values; printing is left to `main`.

use clap::Subcommand;
use serde_json::{json, Value};

use chatlink_core::{
    encode_coins, encode_dialog, encode_item, encode_outfit, encode_point_of_interest,
    encode_recipe, encode_skill, encode_skin, encode_trait, ChatLink, ChatLinkError, ChatLinks,
    Result,
};

/// Case to encode, with its fields.
#[derive(Debug, Clone, Subcommand)]
pub enum EncodeArgs {
    /// Amount of copper.
    Coins { quantity: u32 },
    Item {
        #[arg(allow_negative_numbers = true)]
        item_id: i32,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        #[arg(long, allow_negative_numbers = true)]
        suffix: Option<i32>,
        #[arg(long, allow_negative_numbers = true)]
        secondary_suffix: Option<i32>,
        #[arg(long, allow_negative_numbers = true)]
        skin: Option<i32>,
    },
    Skill {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    Recipe {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    Trait {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    Skin {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    Outfit {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    Dialog {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    PointOfInterest {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
}

impl EncodeArgs {
    pub fn into_link(self) -> Result<ChatLink> {
        let link = match self {
            EncodeArgs::Coins { quantity } => encode_coins(quantity).into(),
            EncodeArgs::Item {
                item_id,
                quantity,
                suffix,
                secondary_suffix,
                skin,
            } => encode_item(item_id, quantity, suffix, secondary_suffix, skin)?.into(),
            EncodeArgs::Skill { id } => encode_skill(id)?.into(),
            EncodeArgs::Recipe { id } => encode_recipe(id)?.into(),
            EncodeArgs::Trait { id } => encode_trait(id).into(),
            EncodeArgs::Skin { id } => encode_skin(id).into(),
            EncodeArgs::Outfit { id } => encode_outfit(id).into(),
            EncodeArgs::Dialog { id } => encode_dialog(id).into(),
            EncodeArgs::PointOfInterest { id } => encode_point_of_interest(id).into(),
        };
        Ok(link)
    }
}

fn error_json(e: &ChatLinkError) -> Value {
    json!({ "code": e.code().as_str(), "message": e.to_string() })
}

/// One report per token: `{token, link}` or `{token, error}`.
pub fn decode_report(links: &ChatLinks, token: &str) -> Value {
    match links.decode(token) {
        Ok(link) => json!({ "token": token, "link": link }),
        Err(e) => {
            tracing::debug!(token, error = %e, "decode failed");
            json!({ "token": token, "error": error_json(&e) })
        }
    }
}

/// Rendered token plus the value it carries.
pub fn encode_report(links: &ChatLinks, args: EncodeArgs) -> Result<Value> {
    let link = args.into_link()?;
    Ok(json!({ "token": links.render(&link)?, "link": link }))
}

/// Every token found in `message`, with byte offsets.
pub fn scan_report(links: &ChatLinks, message: &str) -> Vec<Value> {
    links
        .scan(message)
        .map(|found| {
            let mut v = json!({
                "start": found.range.start,
                "end": found.range.end,
                "token": found.text,
            });
            match &found.link {
                Ok(link) => v["link"] = json!(link),
                Err(e) => v["error"] = error_json(e),
            }
            v
        })
        .collect()
}
