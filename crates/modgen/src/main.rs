//! create-module - Scaffold Feature, Domain and Library Swift packages

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use modgen_core::{ModuleKind, ModuleName, ScaffoldError, Scaffolder, DEFAULT_ROOT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-module")]
#[command(about = "Create a module following the modular layout (Feature/Domain/Library)")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub module: ModuleArgs,

    /// Packages directory that module directories are created under
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Print the files that would be created without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ModuleArgs {
    /// Create a Feature module, e.g. User
    #[arg(short, long, value_name = "NAME", value_parser = parse_name)]
    pub feature: Option<ModuleName>,

    /// Create a Domain module, e.g. Health
    #[arg(short, long, value_name = "NAME", value_parser = parse_name)]
    pub domain: Option<ModuleName>,

    /// Create a Library module, e.g. Network
    #[arg(short, long, value_name = "NAME", value_parser = parse_name)]
    pub library: Option<ModuleName>,
}

impl ModuleArgs {
    fn selection(self) -> Option<(ModuleKind, ModuleName)> {
        self.feature
            .map(|name| (ModuleKind::Feature, name))
            .or_else(|| self.domain.map(|name| (ModuleKind::Domain, name)))
            .or_else(|| self.library.map(|name| (ModuleKind::Library, name)))
    }
}

fn parse_name(raw: &str) -> Result<ModuleName, ScaffoldError> {
    ModuleName::parse(raw)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let Some((kind, name)) = args.module.selection() else {
        anyhow::bail!("one of --feature, --domain or --library is required");
    };

    let scaffolder = Scaffolder::new(args.root);

    if args.dry_run {
        println!(
            "{}",
            format!("Would create {} module {}:", kind, name).cyan().bold()
        );
        for artifact in scaffolder.plan(kind, &name) {
            println!("  {} {}", "->".blue(), artifact.path.display());
        }
        return Ok(());
    }

    match scaffolder.create(kind, &name) {
        Ok(created) => {
            println!("{} {}", "[done]".green().bold(), kind.summary(&name));
            for path in created {
                println!("  {} {}", "+".green(), path.display().to_string().dimmed());
            }
            Ok(())
        }
        Err(ScaffoldError::FileExists { path }) => {
            println!(
                "{} file already exists: {}",
                "[skipped]".yellow().bold(),
                path.display()
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
