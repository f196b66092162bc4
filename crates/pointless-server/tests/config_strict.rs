#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pointless_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  statuspath: "/" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.status_path, "/");
    assert_eq!(cfg.server.health_path, "/healthz");
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
  status_path: "/status"
  health_path: "/live"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.server.status_path, "/status");
    assert_eq!(cfg.server.health_path, "/live");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_and_paths() {
    for bad in [
        "version: 1\nserver:\n  listen: \"not-an-addr\"\n",
        "version: 1\nserver:\n  status_path: \"status\"\n",
        "version: 1\nserver:\n  status_path: \"/x\"\n  health_path: \"/x\"\n",
        "version: 1\nserver:\n  status_path: \"/*\"\n",
        "version: 1\nserver:\n  status_path: \"/page/*rest\"\n",
        "version: 1\nserver:\n  status_path: \"/:a\"\n  health_path: \"/:b\"\n",
        "version: 1\nserver:\n  health_path: \"/live/:id\"\n",
        "version: 1\nserver:\n  health_path: \"/live:ness\"\n",
    ] {
        let err = config::load_from_str(bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_REQUEST", "cfg={bad}");
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("definitely/not/here/pointless.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.status_path, "/");
}

#[test]
fn accepted_paths_build_a_router() {
    use std::sync::Arc;

    use pointless_server::{app_state::AppState, router::build_router, sampler::SysinfoMetrics};

    let cfg = config::load_from_str(
        "version: 1\nserver:\n  status_path: \"/status/v1\"\n  health_path: \"/live\"\n",
    )
    .expect("must parse");
    let state = AppState::with_metrics(cfg, Arc::new(SysinfoMetrics::new())).unwrap();
    let _router = build_router(state);
}
