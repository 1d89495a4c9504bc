//! Generated by paragen for `generated`.
//! Regeneration keeps hand-written code only between the EXTRA CODE and PARSE FINISH markers.
#![allow(unused_imports)]

use crate::convert::MILLIS_TO_DURATION;
use paragen_runtime::prelude::*;
use std::time::Duration;
use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Depth {
    #[default]
    Shallow,
    Deep,
}

/* EXTRA CODE START */
/* EXTRA CODE END */

// BELOW IS GENERATED CODE. Hand-written additions belong between the marker pairs.

impl Depth {
    /// Every variant, in declaration order.
    pub const VARIANTS: &'static [Depth] = &[Depth::Shallow, Depth::Deep];
}

pub static DEPTH_CODEC: OrdinalEnumCodec<Depth> = OrdinalEnumCodec::new("Depth", Depth::VARIANTS, Depth::Shallow);
