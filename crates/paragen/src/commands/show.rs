//! Show command - print one merged unit.

use clap::Args;
use paragen::{FsStore, ParagenConfig};
use std::path::PathBuf;

/// Show command arguments
#[derive(Args)]
pub struct ShowArgs {
    /// Schema file (TOML, or JSON by extension)
    pub schema: PathBuf,

    /// Unit name as declared in the schema (`mod` for the module index)
    pub unit: String,

    /// Output root the previous file is read from
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Run the show command
pub fn run(args: ShowArgs) -> i32 {
    let root = super::project_root();
    let config = ParagenConfig::load(&root);
    let Some(registry) = super::load_schema(&args.schema, &config) else {
        return 1;
    };

    let out_dir = args.out.unwrap_or_else(|| config.out_dir(&root));
    match registry.render_unit(&args.unit, &FsStore::new(out_dir)) {
        Ok(text) => {
            print!("{text}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}
