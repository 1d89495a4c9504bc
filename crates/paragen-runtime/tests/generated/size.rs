//! Generated by paragen for `generated`.
//! Regeneration keeps hand-written code only between the EXTRA CODE and PARSE FINISH markers.
#![allow(unused_imports)]

use crate::convert::MILLIS_TO_DURATION;
use paragen_runtime::prelude::*;
use std::time::Duration;
use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    #[default]
    Small,
    Large,
}

/* EXTRA CODE START */
/* EXTRA CODE END */

// BELOW IS GENERATED CODE. Hand-written additions belong between the marker pairs.

impl Size {
    /// Every variant, in declaration order.
    pub const VARIANTS: &'static [Size] = &[Size::Small, Size::Large];
}

impl StringEnum for Size {
    fn value(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Large => "large",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

pub static SIZE_CODEC: StringEnumCodec<Size> = StringEnumCodec::new("Size", Size::VARIANTS, Size::Small);
