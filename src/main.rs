use clap::{Parser, Subcommand};
use routemap::{config, output, resolve};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "routemap")]
#[command(about = "Route table resolver for convention-based web apps")]
#[command(long_about = "\
Route table resolver for convention-based web apps

Your filesystem is the route source. Page files become routes, _layout
files become nested wrappers, and $name segments become URL parameters.
An explicit routes table in routemap.toml replaces scanning entirely.

Pages structure:

  src/pages/
  ├── index.js                 # → /
  ├── users/
  │   └── list.js              # → /users/list
  ├── detail/
  │   └── page.js              # → /detail (directory's own page)
  ├── $userId/
  │   └── page.js              # → /:userId (dynamic segment)
  └── list/
      ├── _layout.js           # layout wrapping everything under /list
      ├── b.js                 # → /list/b
      └── index.js             # → /list/

Test files (*.test.*, *.spec.*), dotfiles, and non-component files are
ignored. Two files resolving to the same path fail the build with every
offender listed.

Run 'routemap gen-config' to generate a documented routemap.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project root directory
    #[arg(long, default_value = ".", global = true)]
    cwd: PathBuf,

    /// Pages directory (defaults to <cwd>/pages_dir from config)
    #[arg(long, global = true)]
    pages: Option<PathBuf>,

    /// Output path for the resolved route manifest
    #[arg(long, default_value = "routes.json", global = true)]
    out: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the route table and write the route manifest
    Resolve,
    /// Validate pages and config without writing anything
    Check,
    /// Print a stock routemap.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve => {
            let (ctx, config) = load(&cli)?;
            let table = resolve::resolve_routes(&ctx, &config)?;
            let json = serde_json::to_string_pretty(&table)?;
            std::fs::write(&cli.out, json)?;
            output::print_route_table(&table);
            println!("Wrote {}", cli.out.display());
        }
        Command::Check => {
            let (ctx, config) = load(&cli)?;
            let table = resolve::resolve_routes(&ctx, &config)?;
            output::print_route_table(&table);
            println!("OK");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load(cli: &Cli) -> Result<(resolve::ResolveContext, config::BuildConfig), config::ConfigError> {
    let config = config::load_config(&cli.cwd)?;
    let mut ctx = resolve::ResolveContext::new(&cli.cwd);
    if let Some(pages) = &cli.pages {
        // join() keeps absolute overrides as-is and anchors relative ones at cwd
        ctx = ctx.with_pages_path(cli.cwd.join(pages));
    }
    Ok((ctx, config))
}
