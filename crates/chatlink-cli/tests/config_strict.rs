#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chatlink_cli::config;
use chatlink_core::TrailingBytes;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
decode:
  trailing: reject # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.decode.trailing_bytes, TrailingBytes::Ignore);
    assert_eq!(cfg.decode.max_token_len, 256);
    assert!(!cfg.output.pretty);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
decode:
  trailing_bytes: reject
  max_token_len: 1024
output:
  pretty: true
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.decode.trailing_bytes, TrailingBytes::Reject);
    assert_eq!(cfg.decode.max_token_len, 1024);
    assert!(cfg.output.pretty);
}

#[test]
fn rejects_out_of_range_values() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");

    let err = config::load_from_str("version: 1\ndecode:\n  max_token_len: 8\n")
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}
