// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{CommitMessageOptions, PrefixerConfig};
use crate::dependency::Dependency;
use crate::error::{ConfigError, PrefixerError, Result, ResultExt};
use crate::history::{CommitLister, JsonFileLister, LocalRepositoryLister};
use crate::prefix::PrNamePrefixer;
use crate::source::Source;
use console::style;

use super::args::{Cli, Commands, InferArgs, InitArgs, OutputFormat};

/// Name of the configuration file written by `init`.
const CONFIG_FILE_NAME: &str = "prefixer.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        PrefixerConfig::load_from(config_path)?
    } else {
        PrefixerConfig::load()?
    };

    match cli.command.clone() {
        Commands::Prefix(args) => run_prefix(&cli, &config, &args),
        Commands::Capitalize(args) => run_capitalize(&cli, &config, &args),
        Commands::Style(args) => run_style(&cli, &config, &args),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

/// Pick the commit lister for the requested history source.
fn lister_for(args: &InferArgs) -> Box<dyn CommitLister> {
    match (&args.commits, &args.local) {
        (Some(path), _) => Box::new(JsonFileLister::new(path)),
        (None, Some(dir)) => Box::new(LocalRepositoryLister::new(dir)),
        // clap requires one of the two
        (None, None) => Box::new(LocalRepositoryLister::new(".")),
    }
}

fn dependencies_from(args: &InferArgs) -> Vec<Dependency> {
    let production = args
        .deps
        .iter()
        .map(|name| Dependency::production(name, &args.package_manager));
    let development = args
        .dev_deps
        .iter()
        .map(|name| Dependency::development(name, &args.package_manager));
    production.chain(development).collect()
}

/// Command-line prefix flags override the configured ones.
fn options_from(args: &InferArgs, config: &PrefixerConfig) -> CommitMessageOptions {
    let mut options = config.commit_message.clone();
    if args.prefix.is_some() {
        options.prefix = args.prefix.clone();
    }
    if args.prefix_development.is_some() {
        options.prefix_development = args.prefix_development.clone();
    }
    if args.include_scope {
        options.include_scope = true;
    }
    options
}

fn build_prefixer<'a, L: CommitLister + ?Sized>(
    lister: &'a L,
    config: &PrefixerConfig,
    args: &InferArgs,
) -> Result<PrNamePrefixer<'a, L>> {
    let source = Source::new(&args.provider, &args.repo);
    let prefixer = PrNamePrefixer::new(lister, &source, dependencies_from(args), config)?
        .with_security_fix(args.security_fix)
        .with_options(options_from(args, config));
    Ok(prefixer)
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

/// Run the prefix command.
fn run_prefix(cli: &Cli, config: &PrefixerConfig, args: &InferArgs) -> Result<()> {
    tracing::debug!("Running prefix command with args: {:?}", args);

    let lister = lister_for(args);
    let prefixer = build_prefixer(lister.as_ref(), config, args)?;
    let prefix = prefixer.pr_name_prefix()?;

    match cli.format {
        Some(OutputFormat::Json) => {
            print_json(&serde_json::json!({
                "prefix": prefix,
                "scope": prefixer.scope(),
                "security_fix": args.security_fix,
            }));
        }
        _ => println!("\"{}\"", prefix),
    }

    Ok(())
}

/// Run the capitalize command.
fn run_capitalize(cli: &Cli, config: &PrefixerConfig, args: &InferArgs) -> Result<()> {
    tracing::debug!("Running capitalize command with args: {:?}", args);

    let lister = lister_for(args);
    let prefixer = build_prefixer(lister.as_ref(), config, args)?;
    let capitalize = prefixer.capitalize_first_word()?;

    match cli.format {
        Some(OutputFormat::Json) => print_json(&serde_json::json!({ "capitalize": capitalize })),
        _ => println!("{}", capitalize),
    }

    Ok(())
}

/// Run the style command.
fn run_style(cli: &Cli, config: &PrefixerConfig, args: &InferArgs) -> Result<()> {
    tracing::debug!("Running style command with args: {:?}", args);

    let lister = lister_for(args);
    let prefixer = build_prefixer(lister.as_ref(), config, args)?;
    let decision = prefixer.style_decision()?;

    match cli.format {
        Some(OutputFormat::Json) => {
            let value = serde_json::to_value(decision).context("style")?;
            print_json(&value);
        }
        _ => {
            let origin = if decision.is_prior() {
                "last automation commit"
            } else {
                "recent history"
            };
            println!(
                "{} {}",
                style(decision.to_string()).cyan().bold(),
                style(format!("(from {})", origin)).dim()
            );
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("prefixer {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(PrefixerError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).map_err(|e| PrefixerError::WithContext {
        context: "init".to_string(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    println!("{} Created {}", style("✓").green().bold(), CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn infer_args(argv: &[&str]) -> InferArgs {
        let mut full = vec!["prefixer", "prefix", "-p", "github", "-r", "a/b", "--commits", "c.json"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Prefix(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_dependencies_from_args() {
        let args = infer_args(&["--dep", "serde", "--dev-dep", "tempfile"]);
        let deps = dependencies_from(&args);
        assert_eq!(deps.len(), 2);
        assert!(deps[0].production);
        assert!(!deps[1].production);
        assert_eq!(deps[1].package_manager, "cargo");
    }

    #[test]
    fn test_options_from_args_override_config() {
        let mut config = PrefixerConfig::default();
        config.commit_message.prefix = Some("chore".to_string());

        let options = options_from(&infer_args(&[]), &config);
        assert_eq!(options.prefix.as_deref(), Some("chore"));
        assert!(!options.include_scope);

        let options = options_from(&infer_args(&["--prefix", "deps", "--include-scope"]), &config);
        assert_eq!(options.prefix.as_deref(), Some("deps"));
        assert!(options.include_scope);
    }
}
