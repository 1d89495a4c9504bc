//! Regeneration merge.
//!
//! Generated files are rewritten wholesale on every run. Before that happens
//! the previous file is scanned for what the user added by hand:
//!
//! - top-level `use` statements outside marker regions;
//! - the lines between each START/END marker pair.
//!
//! The fresh body carries one MARK line per region; each is replaced with the
//! START line, the recovered lines, and the END line, at the MARK's
//! indentation. Running the merge on its own output yields the same text.

use std::collections::BTreeSet;

/// A START/MARK/END triple delimiting one hand-editable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub start: &'static str,
    pub mark: &'static str,
    pub end: &'static str,
}

/// Module-level code: extra impls, helper functions, trait definitions.
pub const EXTRA_CODE: Marker = Marker {
    start: "/* EXTRA CODE START */",
    mark: "/* EXTRA CODE MARK */",
    end: "/* EXTRA CODE END */",
};

/// Statements run at the end of `parse`, with `value` mutable and in scope.
pub const PARSE_FINISH: Marker = Marker {
    start: "/* PARSE FINISH START */",
    mark: "/* PARSE FINISH MARK */",
    end: "/* PARSE FINISH END */",
};

const MARKERS: [Marker; 2] = [EXTRA_CODE, PARSE_FINISH];

/// Hand-written content found in a previously generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recovered {
    pub imports: BTreeSet<String>,
    /// Region contents, indexed like [`MARKERS`].
    regions: [Vec<String>; 2],
}

impl Recovered {
    pub fn extra_code(&self) -> &[String] {
        &self.regions[0]
    }

    pub fn parse_finish(&self) -> &[String] {
        &self.regions[1]
    }

    fn region(&self, marker: &Marker) -> &[String] {
        match MARKERS.iter().position(|m| m == marker) {
            Some(index) => &self.regions[index],
            None => &[],
        }
    }
}

/// Scan a previously generated file.
///
/// Each marker pair is matched on its own pass, so a broken pair never hides
/// another one. A START with no matching END is dropped with a warning and its
/// lines are read as ordinary file content. `use` statements outside the
/// closed regions are kept whole, including the multi-line form rustfmt
/// writes.
pub fn recover(previous: &str) -> Recovered {
    let lines: Vec<&str> = previous.lines().collect();
    let mut recovered = Recovered::default();
    let mut in_region = vec![false; lines.len()];

    for (index, marker) in MARKERS.iter().enumerate() {
        let mut open: Option<usize> = None;
        for (n, line) in lines.iter().enumerate() {
            if let Some(start) = open {
                if line.contains(marker.end) {
                    recovered.regions[index]
                        .extend(lines[start + 1..n].iter().map(|l| (*l).to_owned()));
                    in_region[start..=n].fill(true);
                    open = None;
                } else if line.contains(marker.start) {
                    warn_unclosed(marker, start);
                    open = Some(n);
                }
            } else if line.contains(marker.start) {
                open = Some(n);
            }
        }
        if let Some(start) = open {
            warn_unclosed(marker, start);
        }
    }

    let mut statement: Option<String> = None;
    for (line, _) in lines.iter().zip(&in_region).filter(|(_, inside)| !**inside) {
        let line = line.trim_end();
        match &mut statement {
            Some(open) => {
                open.push('\n');
                open.push_str(line);
            }
            None if line.starts_with("use ") => statement = Some(line.to_owned()),
            None => continue,
        }
        if line.ends_with(';') {
            recovered.imports.extend(statement.take());
        }
    }
    if let Some(open) = statement {
        tracing::warn!(import = %open, "`use` statement is never terminated; it is dropped");
    }
    recovered
}

fn warn_unclosed(marker: &Marker, start: usize) {
    tracing::warn!(
        marker = marker.start,
        line = start + 1,
        "marker region is never closed; its content is dropped"
    );
}

/// Build the final file text.
///
/// `module` names the namespace in the header. `imports` are the unit's own
/// import lines; they are unioned with those recovered from `previous`.
pub fn merge(module: &str, imports: &[String], body: &str, previous: Option<&str>) -> String {
    let recovered = previous.map(recover).unwrap_or_default();

    let mut all_imports = recovered.imports.clone();
    all_imports.extend(
        imports
            .iter()
            .map(|line| line.trim().to_owned())
            .filter(|line| !line.is_empty()),
    );

    let mut out = String::new();
    out.push_str(&format!("//! Generated by paragen for `{module}`.\n"));
    out.push_str(
        "//! Regeneration keeps hand-written code only between the EXTRA CODE and PARSE FINISH markers.\n",
    );
    out.push_str("#![allow(unused_imports)]\n");
    out.push('\n');
    for import in &all_imports {
        out.push_str(import);
        out.push('\n');
    }
    if !all_imports.is_empty() {
        out.push('\n');
    }

    for line in body.lines() {
        let trimmed = line.trim();
        match MARKERS.iter().find(|m| trimmed == m.mark) {
            Some(marker) => {
                let indent = &line[..line.len() - line.trim_start().len()];
                out.push_str(indent);
                out.push_str(marker.start);
                out.push('\n');
                for kept in recovered.region(marker) {
                    out.push_str(kept);
                    out.push('\n');
                }
                out.push_str(indent);
                out.push_str(marker.end);
                out.push('\n');
            }
            None => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}
