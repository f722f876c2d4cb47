use clap::{Parser, Subcommand};
use folio::{config, content, generate, output};
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
#[command(name = "folio")]
#[command(about = "Static site generator for personal portfolio and blog sites")]
#[command(long_about = "\
Static site generator for personal portfolio and blog sites

Your content directory is the data source. TOML registries describe the
profile, projects, and publications; markdown files become blog posts.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── profile.toml                 # Who you are (required)
  ├── profile.zh.toml              # Alternate profile variants (optional)
  ├── projects.toml                # Portfolio entries, in display order
  ├── publications.toml            # External articles, in display order
  ├── posts/
  │   └── 2024-03-10-some-slug.md  # Blog posts, date from filename
  └── assets/                      # Avatar, covers → copied to output

All content validation happens at load time: a publisher outside the known
set, a malformed date or URL, or an image pointing at a missing asset stops
the build before anything renders.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Print the loaded content inventory as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Load content and produce the HTML site
    Build,
    /// Validate the content directory without building
    Check(CheckArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site = content::load(&cli.source)?;
            output::print_check_output(&site);

            println!("==> Generating HTML → {}", cli.output.display());
            let summary = generate::generate(&site, &cli.output, &cli.source.join("assets"))?;
            output::print_generate_output(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check(args) => {
            let site = content::load(&cli.source)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&site)?);
            } else {
                println!("==> Checking {}", cli.source.display());
                output::print_check_output(&site);
                println!("==> Content is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
