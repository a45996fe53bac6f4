//! Chat-link vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chatlink_core::{decode, render};

use vector_loader::load;

#[test]
fn link_vectors() {
    let files = [
        "coin_12345.json",
        "coin_bare_base64.json",
        "coin_trailing_ignored.json",
        "coin_truncated.json",
        "skill_1337.json",
        "skill_negative.json",
        "recipe_300.json",
        "recipe_base64_frame.json",
        "item_plain.json",
        "item_full.json",
        "item_skin_only.json",
        "item_unknown_flags.json",
        "item_flag_missing_id.json",
        "item_too_short.json",
        "dialog.json",
        "point_of_interest.json",
        "trait.json",
        "skin.json",
        "outfit.json",
        "bad_base64.json",
        "bad_base64_length.json",
        "empty.json",
        "unknown_header.json",
        "reserved_player.json",
        "reserved_match.json",
    ];

    for f in files {
        let v = load(f);
        let token = v.frame.token();
        let res = decode(&token);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let link = res.expect("expected ok link");
        let ex = v.expect.expect("missing expect block");
        assert_eq!(serde_json::to_value(link).unwrap(), ex, "vector={}", v.description);

        if v.canonical {
            match v.frame.bytes() {
                Some(raw) => assert_eq!(
                    link.to_bytes().as_ref(),
                    raw.as_slice(),
                    "vector={}",
                    v.description
                ),
                None => assert_eq!(render(&link), token, "vector={}", v.description),
            }
        }
    }
}
