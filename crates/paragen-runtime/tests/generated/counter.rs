//! Generated by paragen for `generated`.
//! Regeneration keeps hand-written code only between the EXTRA CODE and PARSE FINISH markers.
#![allow(unused_imports)]

use crate::convert::MILLIS_TO_DURATION;
use paragen_runtime::prelude::*;
use std::fmt;
use std::time::Duration;
use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    pub count: i32,
    pub label: Option<String>,
}

/* EXTRA CODE START */
impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label}={}", self.count),
            None => write!(f, "{}", self.count),
        }
    }
}
/* EXTRA CODE END */

// BELOW IS GENERATED CODE. Hand-written additions belong between the marker pairs.

pub static COUNTER_CODEC: CounterCodec = CounterCodec::new();

pub struct CounterCodec {
    derived: Derived<Counter>,
}

impl CounterCodec {
    pub const fn new() -> Self {
        Self {
            derived: Derived::new(),
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        COUNTER_CODEC.default_value()
    }
}

#[allow(deprecated)]
impl Codec<Counter> for CounterCodec {
    fn name(&self) -> &str {
        "Counter"
    }

    fn default_value(&self) -> Counter {
        Counter {
            count: 0,
            label: None,
        }
    }

    fn parse(&self, src: &mut TokenSource<'_>) -> Counter {
        if !src.is_start_object() {
            src.skip_children();
            return self.default_value();
        }
        let mut field_count: i32 = 0;
        let mut field_label: Option<String> = None;
        while let Some(key) = src.next_field() {
            match key.as_str() {
                "count" => field_count = src.value_as_i32(),
                "label" => field_label = TEXT.as_nullable_codec().parse(src),
                _ => src.report_unknown_field(&key, self.name()),
            }
            src.skip_children();
        }
        #[allow(unused_mut)]
        let mut value = Counter {
            count: field_count,
            label: field_label,
        };
        /* PARSE FINISH START */
        /* PARSE FINISH END */
        value
    }

    fn serialize(&self, value: &Counter, sink: &mut TokenSink, framing: bool) {
        if framing {
            sink.begin_object();
        }
        sink.number_field("count", value.count);
        match &value.label {
            Some(v) => {
                sink.field_name("label");
                TEXT.serialize(v, sink, true);
            }
            None => sink.null_field("label"),
        }
        if framing {
            sink.end_object();
        }
    }

    fn derived(&self) -> &Derived<Counter> {
        &self.derived
    }
}
