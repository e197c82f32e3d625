#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use polgate_core::PolicyId;
use polgate_gateway::{app_state::AppState, config};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
  metadata_timeout: 100 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG_INVALID");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.gateway.write_methods, vec!["PUT".to_string()]);
    assert_eq!(cfg.constraints.default, "standard");
    assert!(cfg.containers.is_empty());
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn constraints_section_passes_unknown_keys_through() {
    let ok = r#"
version: 1
constraints:
  use: "egg:objstore#constraints"
  swift_dir: /etc/swift
  retries: 3
  policy_2: posix
containers:
  - { account: AUTH_a, container: photos, storage_policy: 2 }
  - { account: AUTH_a, container: docs, storage_policy: "gold" }
  - { account: AUTH_a, container: tmp }
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let opts: Vec<_> = cfg.constraints.string_options().collect();
    assert!(opts.contains(&("policy_2", "posix")));
    assert!(opts.contains(&("use", "egg:objstore#constraints")));

    assert_eq!(cfg.containers[0].storage_policy, Some(PolicyId::from("2")));
    assert_eq!(cfg.containers[1].storage_policy, Some(PolicyId::from("gold")));
    assert_eq!(cfg.containers[2].storage_policy, None);

    AppState::from_config(cfg).expect("registry must compile");
}

#[test]
fn policy_option_must_name_a_validator() {
    let bad = r#"
version: 1
constraints:
  policy_2: 7
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG_INVALID");
}

#[test]
fn bad_gateway_values() {
    for bad in [
        "version: 1\ngateway: { listen: \"nowhere\" }\n",
        "version: 1\ngateway: { metadata_timeout_ms: 10 }\n",
        "version: 1\ngateway: { write_methods: [] }\n",
        "version: 1\ngateway: { write_methods: [\"P UT\"] }\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.code().as_str(), "CONFIG_INVALID", "config={bad}");
    }
}

#[test]
fn unknown_validator_fails_startup() {
    let cfg = config::load_from_str("version: 1\nconstraints:\n  policy_1: quantum\n").unwrap();
    let err = AppState::from_config(cfg).err().expect("must fail");
    assert_eq!(err.code().as_str(), "UNKNOWN_VALIDATOR");

    let cfg = config::load_from_str("version: 1\nconstraints:\n  default: nope\n").unwrap();
    let err = AppState::from_config(cfg).err().expect("must fail");
    assert_eq!(err.code().as_str(), "UNKNOWN_VALIDATOR");
}

#[test]
fn container_entries_need_account_and_container() {
    for bad in [
        "version: 1\ncontainers:\n  - { account: \"\", container: photos, storage_policy: 2 }\n",
        "version: 1\ncontainers:\n  - { account: AUTH_a, container: \"\" }\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.code().as_str(), "CONFIG_INVALID", "config={bad}");
    }
}
