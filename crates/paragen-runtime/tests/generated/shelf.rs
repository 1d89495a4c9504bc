//! Generated by paragen for `generated`.
//! Regeneration keeps hand-written code only between the EXTRA CODE and PARSE FINISH markers.
#![allow(unused_imports)]

use crate::convert::MILLIS_TO_DURATION;
use paragen_runtime::prelude::*;
use std::time::Duration;
use super::*;

/// Shelf contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelf {
    pub size: Size,
    pub items: Vec<Counter>,
    pub best: Option<Counter>,
    pub depth: Depth,
    pub priority: Option<Priority>,
    /// How long to wait before giving up.
    pub timeout: Duration,
}

/* EXTRA CODE START */
impl Shelf {
    pub fn total(&self) -> i64 {
        self.items.iter().map(|c| i64::from(c.count)).sum()
    }
}
/* EXTRA CODE END */

// BELOW IS GENERATED CODE. Hand-written additions belong between the marker pairs.

pub static SHELF_CODEC: ShelfCodec = ShelfCodec::new();

pub struct ShelfCodec {
    derived: Derived<Shelf>,
}

impl ShelfCodec {
    pub const fn new() -> Self {
        Self {
            derived: Derived::new(),
        }
    }
}

impl Default for Shelf {
    fn default() -> Self {
        SHELF_CODEC.default_value()
    }
}

#[allow(deprecated)]
impl Codec<Shelf> for ShelfCodec {
    fn name(&self) -> &str {
        "Shelf"
    }

    fn default_value(&self) -> Shelf {
        Shelf {
            size: Size::Small,
            items: Vec::new(),
            best: None,
            depth: Depth::Shallow,
            priority: None,
            timeout: MILLIS_TO_DURATION.default_value(),
        }
    }

    fn parse(&self, src: &mut TokenSource<'_>) -> Shelf {
        if !src.is_start_object() {
            src.skip_children();
            return self.default_value();
        }
        let mut field_size: Size = Size::Small;
        let mut field_items: Vec<Counter> = Vec::new();
        let mut field_best: Option<Counter> = None;
        let mut field_depth: Depth = Depth::Shallow;
        let mut field_priority: Option<Priority> = None;
        let mut field_timeout: Duration = MILLIS_TO_DURATION.default_value();
        while let Some(key) = src.next_field() {
            match key.as_str() {
                "size" => field_size = SIZE_CODEC.parse(src),
                "items" => field_items = COUNTER_CODEC.as_list_codec().parse(src),
                "best" => field_best = COUNTER_CODEC.as_nullable_codec().parse(src),
                "depth" => field_depth = DEPTH_CODEC.parse(src),
                "priority" => field_priority = PRIORITY_CODEC.as_nullable_codec().parse(src),
                "timeout" => field_timeout = MILLIS_TO_DURATION.parse(src),
                _ => src.report_unknown_field(&key, self.name()),
            }
            src.skip_children();
        }
        #[allow(unused_mut)]
        let mut value = Shelf {
            size: field_size,
            items: field_items,
            best: field_best,
            depth: field_depth,
            priority: field_priority,
            timeout: field_timeout,
        };
        /* PARSE FINISH START */
        value.items.retain(|c| c.count >= 0);
        /* PARSE FINISH END */
        value
    }

    fn serialize(&self, value: &Shelf, sink: &mut TokenSink, framing: bool) {
        if framing {
            sink.begin_object();
        }
        sink.field_name("size");
        SIZE_CODEC.serialize(&value.size, sink, true);
        sink.field_name("items");
        COUNTER_CODEC.as_list_codec().serialize(&value.items, sink, true);
        match &value.best {
            Some(v) => {
                sink.field_name("best");
                COUNTER_CODEC.serialize(v, sink, true);
            }
            None => sink.null_field("best"),
        }
        sink.field_name("depth");
        DEPTH_CODEC.serialize(&value.depth, sink, true);
        match &value.priority {
            Some(v) => {
                sink.field_name("priority");
                PRIORITY_CODEC.serialize(v, sink, true);
            }
            None => sink.null_field("priority"),
        }
        sink.field_name("timeout");
        MILLIS_TO_DURATION.serialize(&value.timeout, sink, true);
        if framing {
            sink.end_object();
        }
    }

    fn derived(&self) -> &Derived<Shelf> {
        &self.derived
    }
}
