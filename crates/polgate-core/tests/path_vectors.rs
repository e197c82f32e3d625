//! Object path decomposition vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use http::Method;

use polgate_core::path::{split_path, RequestDescriptor};


#[test]
fn object_path_vectors() {
    for v in vector_loader::load("object_paths.json") {
        let method = Method::from_bytes(v.method.as_bytes()).unwrap();
        let res = RequestDescriptor::parse(&method, &v.path);

        if let Some(reason) = v.expect_passthrough {
            let got = res.expect_err("expected passthrough");
            assert_eq!(got.as_str(), reason, "vector={}", v.description);
            continue;
        }

        let desc = res.expect("expected object target");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(desc.method, method, "vector={}", v.description);
        assert_eq!(desc.version, ex.version, "vector={}", v.description);
        assert_eq!(desc.account, ex.account, "vector={}", v.description);
        assert_eq!(desc.container, ex.container, "vector={}", v.description);
        assert_eq!(desc.object, ex.object, "vector={}", v.description);
    }
}

#[test]
fn split_pads_missing_segments() {
    let segs = split_path("/v1/a").unwrap();
    assert_eq!(segs.version, "v1");
    assert_eq!(segs.account, Some("a"));
    assert_eq!(segs.container, None);
    assert_eq!(segs.object, None);

    let segs = split_path("/v1").unwrap();
    assert_eq!(segs.account, None);
}

#[test]
fn split_folds_remainder_into_object() {
    let segs = split_path("/v1/a/c/x/y/z").unwrap();
    assert_eq!(segs.container, Some("c"));
    assert_eq!(segs.object, Some("x/y/z"));
}

#[test]
fn invalid_utf8_replacement_grows_byte_length() {
    let desc = RequestDescriptor::parse(&Method::PUT, "/v1/a/c/%FF%FE").unwrap();
    assert_eq!(desc.object, "\u{FFFD}\u{FFFD}");
    assert_eq!(desc.object.len(), 6);
}
