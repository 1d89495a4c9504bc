//! Generate command - write every unit of a schema.

use clap::Args;
use paragen::{FsStore, ParagenConfig};
use std::path::PathBuf;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Schema file (TOML, or JSON by extension)
    pub schema: PathBuf,

    /// Output root (default: config `output.out_dir`, then `src`)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Exit non-zero if any file is out of date; write nothing
    #[arg(long)]
    pub check: bool,

    /// Report what would change; write nothing
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> i32 {
    let root = super::project_root();
    let config = ParagenConfig::load(&root);
    let Some(registry) = super::load_schema(&args.schema, &config) else {
        return 1;
    };

    let out_dir = args.out.unwrap_or_else(|| config.out_dir(&root));
    let mut store = FsStore::new(&out_dir).dry_run(args.check || args.dry_run);

    let report = match registry.generate(&mut store) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };

    for path in &report.written {
        let verb = if args.check || args.dry_run {
            "would write"
        } else {
            "wrote"
        };
        println!("{verb} {}", out_dir.join(path).display());
    }
    if args.check && !report.is_up_to_date() {
        eprintln!(
            "{} generated file(s) out of date; run `paragen generate {}`",
            report.written.len(),
            args.schema.display()
        );
        return 1;
    }
    0
}
