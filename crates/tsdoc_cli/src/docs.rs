//! The documentation run behind the `tsdoc` command

use crate::Cli;
use anyhow::{Context, Result};
use tsdoc_etch::{AliasRule, DocConfig, Etcher, RunPrinter};

/// Run documentation generation for the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    tracing::debug!(root = %config.root.display(), entry = %config.entry, "resolved configuration");

    let mut etcher = Etcher::new(config);
    let report = etcher.run().context("documentation run failed")?;

    RunPrinter::new(&report, etcher.diagnostics(), !cli.no_color).print_to_stdout();
    Ok(())
}

/// The configuration file, or defaults, with the flags applied on top
fn resolve_config(cli: &Cli) -> Result<DocConfig> {
    let mut config = match &cli.config {
        Some(path) => DocConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => DocConfig::discover(&cli.root).context("failed to load tsdoc.toml")?,
    };

    if let Some(entry) = &cli.entry {
        config.entry = entry.clone();
    }
    if let Some(docs) = &cli.docs {
        config.docs = docs.clone();
    }
    if let Some(prefix) = &cli.link_prefix {
        config.link_prefix = prefix.clone();
    }
    config.clear_docs_on_start |= cli.clean;
    config.document_private |= cli.private;
    config.document_internal |= cli.internal;

    for alias in &cli.aliases {
        let rule = AliasRule::parse(alias).with_context(|| format!("invalid alias `{}`", alias))?;
        config.aliases.push(rule);
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tsdoc").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = resolve_config(&cli(&[
            root,
            "--entry",
            "lib/**/*.ts",
            "--docs",
            "out",
            "--private",
            "--alias",
            "lib/=",
        ]))
        .unwrap();
        assert_eq!(config.entry, "lib/**/*.ts");
        assert_eq!(config.docs, std::path::PathBuf::from("out"));
        assert!(config.document_private);
        assert!(!config.document_internal);
        assert_eq!(config.aliases, vec![AliasRule::new("lib/", "")]);
    }

    #[test]
    fn test_config_file_is_discovered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tsdoc.toml"),
            "entry = \"pkg/**/*.ts\"\nlink_prefix = \"/api/\"\n",
        )
        .unwrap();
        let config = resolve_config(&cli(&[dir.path().to_str().unwrap()])).unwrap();
        assert_eq!(config.entry, "pkg/**/*.ts");
        assert_eq!(config.link_prefix, "/api/");
    }

    #[test]
    fn test_bad_alias_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_config(&cli(&[dir.path().to_str().unwrap(), "--alias", "nope"]))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("invalid alias"));
    }
}
