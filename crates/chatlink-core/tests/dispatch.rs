#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use bytes::Bytes;

use chatlink_core::protocol::codec::{CaseCodec, VariantCodec};
use chatlink_core::{
    decode, encode_coins, encode_skill, ChatLink, ChatLinkError, ChatLinks, CodecTable, CoinLink,
    DecodeOptions, Dispatcher, ErrorCode, Header, SkillLink, TrailingBytes,
};

#[test]
fn standard_table_headers() {
    let d = Dispatcher::standard();
    assert_eq!(d.registered_headers(), vec![1, 2, 3, 4, 7, 8, 10, 11, 12]);
    for h in d.registered_headers() {
        assert!(Header::from_u8(h).is_some(), "header {h} not named");
    }
}

#[test]
fn headers_are_injective() {
    let mut table = CodecTable::new();
    table.register(Arc::new(CaseCodec::<CoinLink>::new())).unwrap();
    let err = table
        .register(Arc::new(CaseCodec::<CoinLink>::new()))
        .expect_err("duplicate must fail");
    assert_eq!(err, ChatLinkError::DuplicateHeader(0x01));
    assert_eq!(err.code(), ErrorCode::DuplicateHeader);
    assert_eq!(table.len(), 1);
}

#[test]
fn custom_table_only_knows_its_codecs() {
    let mut table = CodecTable::new();
    table.register(Arc::new(CaseCodec::<CoinLink>::new())).unwrap();
    let links = ChatLinks::new(Dispatcher::new(table), DecodeOptions::default());

    assert!(links.decode("[&ATkwAAA=]").is_ok());
    assert_eq!(links.decode("[&BzkF]").unwrap_err(), ChatLinkError::UnknownVariant(7));
}

#[test]
fn custom_table_only_renders_its_codecs() {
    let mut table = CodecTable::new();
    table.register(Arc::new(CaseCodec::<CoinLink>::new())).unwrap();
    let links = ChatLinks::new(Dispatcher::new(table), DecodeOptions::default());

    let skill = ChatLink::from(encode_skill(1337).unwrap());
    assert_eq!(links.render(&skill).unwrap_err(), ChatLinkError::UnknownVariant(7));

    let coins = ChatLink::from(encode_coins(12345));
    let text = links.render(&coins).unwrap();
    assert_eq!(text, "[&ATkwAAA=]");
    assert_eq!(links.decode(&text).unwrap(), coins);

    // The standard facade still covers every case.
    assert_eq!(decode(&skill.to_string()).unwrap(), skill);
}

#[test]
fn codec_encodes_only_its_case() {
    let coin = CaseCodec::<CoinLink>::new();
    let bytes = coin.encode(&ChatLink::from(encode_coins(12345))).unwrap();
    assert_eq!(bytes.as_ref(), &[0x01, 0x39, 0x30, 0x00, 0x00]);
    assert!(coin.encode(&ChatLink::from(encode_skill(1).unwrap())).is_none());
}

#[test]
fn header_display_names_value() {
    assert_eq!(Header::Skill.to_string(), "Skill(0x07)");
    assert_eq!(Header::Recipe.to_string(), "Recipe(0x0a)");
}

#[test]
fn empty_buffer_is_truncated() {
    let d = Dispatcher::standard();
    let err = d.decode(Bytes::new(), TrailingBytes::Ignore).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Truncated);
}

#[test]
fn codec_reports_min_len() {
    let skill = CaseCodec::<SkillLink>::new();
    assert_eq!(skill.header(), Header::Skill);
    assert_eq!(skill.min_len(), 3);
    assert_eq!(skill.kind(), "skill");

    let err = skill
        .decode(Bytes::from_static(&[0x07, 0x39]), TrailingBytes::Ignore)
        .unwrap_err();
    assert_eq!(
        err,
        ChatLinkError::Truncated {
            kind: "skill",
            need: 3,
            got: 2,
        }
    );
}

#[test]
fn codec_rejects_foreign_header() {
    let coin = CaseCodec::<CoinLink>::new();
    let err = coin
        .decode(Bytes::from_static(&[0x0B, 0, 0, 0, 0]), TrailingBytes::Ignore)
        .unwrap_err();
    assert_eq!(err, ChatLinkError::UnknownVariant(0x0B));
}

#[test]
fn dispatcher_is_shareable_across_threads() {
    let d = Arc::new(Dispatcher::standard());
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let d = Arc::clone(&d);
            std::thread::spawn(move || {
                let link = ChatLink::from(encode_coins(i));
                d.decode(d.encode(&link).unwrap(), TrailingBytes::Reject).unwrap() == link
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
