//! Generated record and enum codecs driven end to end.
//!
//! `generated/` is paragen output for `shelf.toml`, hand edits included; the
//! generator's own tests fail when it goes stale.

use paragen_runtime::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod convert {
    use paragen_runtime::prelude::*;
    use std::time::Duration;

    fn millis_to_duration(ms: i64) -> Duration {
        Duration::from_millis(u64::try_from(ms).unwrap_or(0))
    }

    fn duration_to_millis(d: &Duration) -> i64 {
        i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
    }

    pub static MILLIS_TO_DURATION: ConvertedCodec<i64, Duration> =
        ConvertedCodec::new("Duration", &INT64, millis_to_duration, duration_to_millis);
}

mod generated;

use generated::*;

fn recording_context() -> (CodecContext, Arc<Mutex<Vec<(String, String)>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let context = CodecContext::new().with_unknown_field_hook(move |key, codec| {
        sink.lock().unwrap().push((key.to_string(), codec.to_string()));
    });
    (context, seen)
}

#[test]
fn unknown_key_is_reported_and_skipped() {
    let (context, seen) = recording_context();
    let counter = COUNTER_CODEC
        .parse_str_in(&context, r#"{"count": 5, "label": null, "extra": true}"#)
        .unwrap();
    assert_eq!(
        counter,
        Counter {
            count: 5,
            label: None,
        }
    );
    assert_eq!(
        *seen.lock().unwrap(),
        [("extra".to_string(), "Counter".to_string())]
    );
    assert_eq!(
        COUNTER_CODEC.to_json_string(&counter),
        r#"{"count":5,"label":null}"#
    );
}

#[test]
fn unknown_nested_value_is_skipped_whole() {
    let (context, seen) = recording_context();
    let counter = COUNTER_CODEC
        .parse_str_in(
            &context,
            r#"{"meta": {"count": 99, "deep": [1, {"x": 2}]}, "count": 3, "label": "n"}"#,
        )
        .unwrap();
    assert_eq!(counter.count, 3);
    assert_eq!(counter.label.as_deref(), Some("n"));
    // Keys inside the skipped value are never dispatched.
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn mismatched_input_degrades_to_defaults() {
    assert_eq!(COUNTER_CODEC.parse_str("[1, 2, 3]").unwrap(), Counter::default());
    assert_eq!(COUNTER_CODEC.parse_str("\"counter\"").unwrap(), Counter::default());

    let counter = COUNTER_CODEC
        .parse_str(r#"{"count": "five", "label": 7}"#)
        .unwrap();
    assert_eq!(counter.count, 0);
    assert_eq!(counter.label.as_deref(), Some(""));

    let counter = COUNTER_CODEC
        .parse_str(r#"{"count": {"nested": 1}, "label": "kept"}"#)
        .unwrap();
    assert_eq!(counter.count, 0);
    assert_eq!(counter.label.as_deref(), Some("kept"));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(COUNTER_CODEC.parse_str(r#"{"count": 5"#).is_err());
}

#[test]
fn nested_records_round_trip() {
    let json = r#"{"size":"large","items":[{"count":1,"label":"a"},{"count":2,"label":null}],"best":{"count":2,"label":null},"depth":1,"priority":1,"timeout":1500}"#;
    let shelf = SHELF_CODEC.parse_str(json).unwrap();
    assert_eq!(shelf.size, Size::Large);
    assert_eq!(shelf.items.len(), 2);
    assert_eq!(shelf.total(), 3);
    assert_eq!(shelf.best, Some(shelf.items[1].clone()));
    assert_eq!(shelf.depth, Depth::Deep);
    assert_eq!(shelf.priority, Some(Priority::Low));
    assert_eq!(shelf.timeout, Duration::from_millis(1500));
    assert_eq!(SHELF_CODEC.to_json_string(&shelf), json);
}

#[test]
fn defaults_survive_a_round_trip() {
    let json = SHELF_CODEC.to_json_string(&Shelf::default());
    assert_eq!(
        json,
        r#"{"size":"small","items":[],"best":null,"depth":0,"priority":null,"timeout":0}"#
    );
    assert_eq!(SHELF_CODEC.parse_str(&json).unwrap(), Shelf::default());
    assert_eq!(SHELF_CODEC.parse_str("{}").unwrap(), Shelf::default());

    let json = COUNTER_CODEC.to_json_string(&Counter::default());
    assert_eq!(COUNTER_CODEC.parse_str(&json).unwrap(), Counter::default());
}

#[test]
fn parse_finish_region_runs() {
    let shelf = SHELF_CODEC
        .parse_str(r#"{"items": [{"count": -1}, {"count": 4}]}"#)
        .unwrap();
    assert_eq!(shelf.items, [Counter { count: 4, label: None }]);
}

#[test]
fn extra_code_region_is_compiled_in() {
    let counter = Counter {
        count: 3,
        label: Some("apples".to_string()),
    };
    assert_eq!(counter.to_string(), "apples=3");
    assert_eq!(Counter::default().to_string(), "0");
}

#[test]
fn shelf_fallbacks() {
    let shelf = SHELF_CODEC
        .parse_str(r#"{"size": "huge", "items": {"count": 1}, "best": null, "depth": 7, "timeout": "soon"}"#)
        .unwrap();
    assert_eq!(shelf, Shelf::default());
    assert_eq!(shelf.size, Size::Small);
    assert_eq!(shelf.depth, Depth::Shallow);
    assert_eq!(shelf.timeout, Duration::ZERO);
    assert_eq!(Size::Large.to_string(), "large");
}

#[test]
fn enum_fields_fall_back_to_declared_default() {
    let shelf = SHELF_CODEC
        .parse_str(r#"{"depth": "Deep", "priority": 3}"#)
        .unwrap();
    assert_eq!(shelf.depth, Depth::Shallow);
    // A present but unknown value is still present.
    assert_eq!(shelf.priority, Some(Priority::High));
    assert_eq!(Priority::High.to_string(), "5");

    let shelf = SHELF_CODEC.parse_str(r#"{"priority": null}"#).unwrap();
    assert_eq!(shelf.priority, None);
}

#[test]
fn list_of_records() {
    let list = COUNTER_CODEC.as_list_codec();
    let counters = list
        .parse_str(r#"[{"count": 1}, 5, {"count": 2, "label": "b"}]"#)
        .unwrap();
    assert_eq!(
        counters,
        [
            Counter { count: 1, label: None },
            Counter::default(),
            Counter {
                count: 2,
                label: Some("b".to_string()),
            },
        ]
    );
    assert_eq!(
        list.to_json_string(&counters),
        r#"[{"count":1,"label":null},{"count":0,"label":null},{"count":2,"label":"b"}]"#
    );
    assert!(list.parse_str("{}").unwrap().is_empty());
}

#[test]
fn unframed_record_embeds_in_an_outer_object() {
    let counter = Counter {
        count: 5,
        label: Some("x".to_string()),
    };
    let mut sink = TokenSink::new();
    sink.begin_object();
    sink.string_field("kind", "counter");
    COUNTER_CODEC.serialize(&counter, &mut sink, false);
    sink.end_object();
    assert_eq!(
        sink.into_string(),
        r#"{"kind":"counter","count":5,"label":"x"}"#
    );
}

#[test]
fn pretty_context_indents() {
    let context = CodecContext::new().with_pretty(true);
    let shelf = Shelf {
        size: Size::Large,
        items: vec![Counter {
            count: 1,
            label: Some("a".to_string()),
        }],
        best: None,
        depth: Depth::Deep,
        priority: Some(Priority::High),
        timeout: Duration::from_secs(2),
    };
    insta::assert_snapshot!(SHELF_CODEC.to_json_string_in(&context, &shelf), @r#"
    {
      "size": "large",
      "items": [
        {
          "count": 1,
          "label": "a"
        }
      ],
      "best": null,
      "depth": 1,
      "priority": 5,
      "timeout": 2000
    }
    "#);
}
