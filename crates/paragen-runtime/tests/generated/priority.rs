//! Generated by paragen for `generated`.
//! Regeneration keeps hand-written code only between the EXTRA CODE and PARSE FINISH markers.
#![allow(unused_imports)]

use crate::convert::MILLIS_TO_DURATION;
use paragen_runtime::prelude::*;
use std::time::Duration;
use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    High,
}

/* EXTRA CODE START */
/* EXTRA CODE END */

// BELOW IS GENERATED CODE. Hand-written additions belong between the marker pairs.

impl Priority {
    /// Every variant, in declaration order.
    pub const VARIANTS: &'static [Priority] = &[Priority::Low, Priority::High];
}

impl IntEnum for Priority {
    fn value(self) -> i32 {
        match self {
            Priority::Low => 1,
            Priority::High => 5,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

pub static PRIORITY_CODEC: IntEnumCodec<Priority> = IntEnumCodec::new("Priority", Priority::VARIANTS, Priority::High);
