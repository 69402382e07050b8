use json_dotpath::{Error, JsonType, PathDocument, PrecisionNumber};
use serde_json::{json, Value};
use time::macros::datetime;

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| panic!("bad fixture '{text}': {e}"))
}

#[test]
fn giphy_style_payload_matrix() {
    let value = parse(
        r#"{
            "data": {
                "id": "feqkVgjJpYtjy",
                "images": {
                    "original": {"url": "http://x", "width": "500", "height": 281, "frames": "1.2e1"},
                    "fixed_height": null
                },
                "import_datetime": "2013-03-21T10:52:17",
                "trending_datetime": "1970-01-01",
                "tags": ["cat", "wave"]
            },
            "meta": {"status": 200, "ok": true}
        }"#,
    );
    let doc = PathDocument::try_from(&value).expect("object root");

    assert_eq!(doc.as_string("data.images.original.url").unwrap(), "http://x");
    assert_eq!(doc.as_number("data.images.original.width").unwrap().as_i64(), 500);
    assert_eq!(doc.as_int("data.images.original.height").unwrap(), 281);
    assert_eq!(
        doc.as_number("data.images.original.frames").unwrap(),
        PrecisionNumber::new(12.0)
    );
    assert_eq!(
        doc.as_timestamp("data.import_datetime").unwrap(),
        datetime!(2013-03-21 10:52:17 UTC)
    );
    assert_eq!(
        doc.as_timestamp("data.trending_datetime").unwrap(),
        datetime!(1970-01-01 0:00 UTC)
    );
    assert_eq!(doc.as_array("data.tags").unwrap(), &[json!("cat"), json!("wave")]);
    assert!(doc.as_bool("meta.ok").unwrap());
    assert_eq!(doc.as_int64("meta.status").unwrap(), 200);

    let original = doc.as_object("data.images.original").unwrap();
    assert_eq!(original.as_string("url").unwrap(), "http://x");

    assert!(doc.as_object("data.images.fixed_height").unwrap_err().is_missing_field());
}

#[test]
fn overrun_scalar_is_missing_not_mismatch() {
    let value = json!({"a": {"b": 5}});
    let doc = PathDocument::try_from(&value).unwrap();
    assert_eq!(
        doc.as_number("a.b.c"),
        Err(Error::MissingField {
            path: "a.b.c".to_string()
        })
    );
}

#[test]
fn every_accessor_reports_missing_on_overrun() {
    let value = json!({"s": "x", "n": 1, "b": true, "a": [{"k": 1}], "z": null});
    let doc = PathDocument::try_from(&value).unwrap();

    for path in ["s.k", "n.k", "b.k", "a.k", "a.0.k", "z.k", "nope", "nope.k"] {
        let errors = [
            doc.as_number(path).err(),
            doc.as_float(path).err(),
            doc.as_int(path).err(),
            doc.as_int64(path).err(),
            doc.as_bool(path).err(),
            doc.as_string(path).err(),
            doc.as_timestamp(path).err(),
            doc.as_object(path).err(),
            doc.as_array(path).err(),
        ];
        for err in errors {
            let err = err.unwrap_or_else(|| panic!("expected failure for '{path}'"));
            assert!(err.is_missing_field(), "'{path}' gave {err}");
            assert_eq!(err.path(), path);
            assert!(!err.is_transient());
        }
    }
}

#[test]
fn quoted_number_matches_bare_number_from_text() {
    let value = parse(r#"{"bare": 9.32784283921935914e51, "quoted": "9.32784283921935914e51"}"#);
    let doc = PathDocument::try_from(&value).unwrap();
    let bare = doc.as_number("bare").unwrap();
    assert_eq!(doc.as_number("quoted").unwrap(), bare);
    assert_eq!(bare.as_f64(), "9.32784283921935914e51".parse::<f64>().unwrap());
}

#[test]
fn string_accessor_on_boolean_is_mismatch() {
    let value = json!({"a": true});
    let doc = PathDocument::try_from(&value).unwrap();
    let err = doc.as_string("a").unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            path: "a".to_string(),
            expected: "string",
            actual: JsonType::Bool
        }
    );
    assert_eq!(
        err.to_string(),
        "expected field 'a' to be of type string but was boolean"
    );
}

#[test]
fn mismatch_reports_actual_type_matrix() {
    let value = json!({"n": 1, "s": "x", "b": false, "a": [], "o": {}});
    let doc = PathDocument::try_from(&value).unwrap();

    let actual = |err: Error| match err {
        Error::TypeMismatch { actual, .. } => actual,
        other => panic!("expected mismatch, got {other}"),
    };
    assert_eq!(actual(doc.as_string("n").unwrap_err()), JsonType::Number);
    assert_eq!(actual(doc.as_bool("s").unwrap_err()), JsonType::String);
    assert_eq!(actual(doc.as_array("b").unwrap_err()), JsonType::Bool);
    assert_eq!(actual(doc.as_object("a").unwrap_err()), JsonType::Array);
    assert_eq!(actual(doc.as_number("o").unwrap_err()), JsonType::Object);
}

#[test]
fn timestamp_priority_matrix() {
    let value = json!({
        "millis": "2012-04-23T18:25:43.511Z",
        "offset": "2012-04-23T18:25:43-0700",
        "local": "2012-04-23T18:25:43",
        "date": "2012-04-23",
        "epoch": "1335205543"
    });
    let doc = PathDocument::try_from(&value).unwrap();

    let millis = doc.as_timestamp("millis").unwrap();
    assert_eq!(millis, datetime!(2012-04-23 18:25:43.511 UTC));
    assert_eq!(millis.millisecond(), 511);

    assert_eq!(
        doc.as_timestamp("offset").unwrap(),
        datetime!(2012-04-23 18:25:43 -7)
    );
    assert_eq!(
        doc.as_timestamp("local").unwrap(),
        datetime!(2012-04-23 18:25:43 UTC)
    );
    assert_eq!(
        doc.as_timestamp("date").unwrap(),
        datetime!(2012-04-23 0:00 UTC)
    );
    assert_eq!(
        doc.as_timestamp("epoch").unwrap(),
        datetime!(2012-04-23 18:25:43 UTC)
    );
}

#[test]
fn to_json_text_roundtrip() {
    let value = json!({"b": 1, "a": {"c": [true, null, "x"]}});
    let doc = PathDocument::try_from(&value).unwrap();
    let text = doc.to_json_text().unwrap();
    assert_eq!(text, r#"{"b":1,"a":{"c":[true,null,"x"]}}"#);
    let back: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, value);
}
