use super::CodeWriter;
use crate::merge::EXTRA_CODE;

/// Render the module index (`mod.rs`) declaring and re-exporting every unit
/// file stem, in the given order.
pub fn render_index<'a>(stems: impl IntoIterator<Item = &'a str>) -> String {
    let mut w = CodeWriter::new();
    for stem in stems {
        w.line(format!("pub mod {stem};"));
        w.line(format!("pub use {stem}::*;"));
    }
    w.blank();
    w.line(EXTRA_CODE.mark);
    w.finish()
}
