//! Generated by paragen for `generated`.
//! Regeneration keeps hand-written code only between the EXTRA CODE and PARSE FINISH markers.
#![allow(unused_imports)]

use crate::convert::MILLIS_TO_DURATION;
use paragen_runtime::prelude::*;
use std::time::Duration;

pub mod size;
pub use size::*;
pub mod depth;
pub use depth::*;
pub mod priority;
pub use priority::*;
pub mod counter;
pub use counter::*;
pub mod shelf;
pub use shelf::*;

/* EXTRA CODE START */
/* EXTRA CODE END */
