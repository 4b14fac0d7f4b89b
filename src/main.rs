use clap::{Parser, Subcommand};
use docs_nav::config;
use docs_nav::navigation::{NavError, Navigation};
use docs_nav::output;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docs-nav")]
#[command(about = "Flatten a documentation route tree into sidebar pages")]
#[command(long_about = "\
Flatten a documentation route tree into sidebar pages

Routes are read from nav.toml in the source directory; without any
[[routes]] the built-in documentation tree is used. Each href is relative
to its parent, and noLink nodes group children without being pages.

  [[routes]]
  title = \"Dashboard App\"
  href = \"/dashboard-app\"
  noLink = true

  [[routes.items]]
  title = \"Port Notes\"        # → /dashboard-app/port-notes
  href = \"/port-notes\"

Set RUST_LOG=docs_nav=debug for build details.
Run 'docs-nav gen-config' to generate a documented nav.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing nav.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the flattened page list
    Pages {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the route tree with resolved hrefs
    Tree,
    /// Validate the route tree without printing pages
    Check,
    /// Print a stock nav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docs_nav=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Pages { json } => {
            let nav_config = config::load_config(&cli.source)?;
            let nav = Navigation::from_config(&nav_config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(nav.pages())?);
            } else {
                output::print_pages(&nav);
            }
        }
        Command::Tree => {
            let nav_config = config::load_config(&cli.source)?;
            let nav = Navigation::from_config(&nav_config)?;
            output::print_tree(&nav, nav_config.hrefs.mode);
        }
        Command::Check => {
            let nav_config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.join(config::CONFIG_FILE).display());
            match Navigation::from_config(&nav_config) {
                Ok(nav) => {
                    output::print_issues(nav.warnings(), Some(nav.len()));
                    println!("==> Navigation is valid");
                }
                Err(NavError::Invalid(issues)) => {
                    output::print_issues(&issues, None);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
