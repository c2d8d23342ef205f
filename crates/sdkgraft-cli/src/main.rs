use clap::Parser;
use sdkgraft_core::{build_plan, execute_plan, validate_roots, PlanConfig};
use std::path::PathBuf;
use std::process;

/// Merge an exported app source tree into a freshly scaffolded project and
/// wire up the Geidea POS Connect SDK. Safe to re-run: applied patches are
/// detected and skipped.
#[derive(Parser)]
#[command(name = "sdkgraft", version)]
struct Args {
    /// Exported application source tree
    #[arg(long, default_value = "app-export")]
    source: PathBuf,

    /// Scaffolded target project
    #[arg(long, default_value = "PosApp")]
    target: PathBuf,

    /// Report what each step would do without touching the target
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = PlanConfig {
        source_root: args.source,
        target_root: args.target,
    };

    if let Err(e) = validate_roots(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let plan = build_plan(&config);
    let summary = execute_plan(&plan, args.dry_run);

    println!("\n--- Summary ---");
    println!("Total steps: {}", summary.reports.len());
    println!("Applied:     {}", summary.applied());
    println!("Skipped:     {}", summary.skipped());
    println!("Failed:      {}", summary.failed());

    if !args.dry_run {
        println!(
            "\nNext: run 'npm install' in {:?} to install the JS dependencies, then rebuild the Android project.",
            config.target_root
        );
    }

    if summary.has_failures() {
        process::exit(1);
    }
}
