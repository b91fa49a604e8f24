//! CLI command definitions.

use clap::{Args, Parser, Subcommand};

use crate::manifest::PackageManifest;
use crate::styles::styles;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const CLI_EXAMPLES: &str = "\
Examples:
  pkgexport init my-package         Create a draft package.json
  pkgexport validate my-package     Check the package against the rules
  pkgexport preview my-package      Print the package.json to be written
  pkgexport export my-package       Export a versioned package folder";

const VALIDATE_EXAMPLES: &str = "\
Examples:
  pkgexport validate                Validate current directory
  pkgexport validate ./my-package   Validate specific path
  pkgexport validate --json         JSON output for CI
  pkgexport validate -q             Quiet mode (failures only)";

const EXPORT_EXAMPLES: &str = "\
Examples:
  pkgexport export                  Export current directory
  pkgexport export ./my-package     Export specific path
  pkgexport export -o ./dist        Custom export root
  pkgexport export --package-version 1.2.3   Override manifest version";

const PREVIEW_EXAMPLES: &str = "\
Examples:
  pkgexport preview                 Print package.json for current directory
  pkgexport preview --name com.example.pkg   Preview with overrides";

const INIT_EXAMPLES: &str = "\
Examples:
  pkgexport init                    Create draft package.json here
  pkgexport init ./my-package       Create draft in a directory
  pkgexport init --display-name \"My Package\"  Set fields up front
  pkgexport init -f                 Overwrite an existing draft";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Validate and export versioned asset packages.
#[derive(Debug, Parser)]
#[command(name = "pkgexport", author, version, styles = styles())]
#[command(about = "Validate and export versioned asset packages", after_help = CLI_EXAMPLES)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a package directory and its manifest draft.
    #[command(after_help = VALIDATE_EXAMPLES)]
    Validate {
        /// Package directory (defaults to current directory).
        path: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,

        /// Quiet mode (failures only).
        #[arg(short, long)]
        quiet: bool,

        /// Rule configuration file (defaults to pkgexport.toml beside the assets).
        #[arg(long)]
        config: Option<String>,

        #[command(flatten)]
        manifest: ManifestArgs,
    },

    /// Export a package into a versioned output folder.
    #[command(after_help = EXPORT_EXAMPLES)]
    Export {
        /// Package directory (defaults to current directory).
        path: Option<String>,

        /// Export root (defaults to an ExportedPackages folder beside the package).
        #[arg(short, long)]
        out: Option<String>,

        /// Rule configuration file.
        #[arg(long)]
        config: Option<String>,

        #[command(flatten)]
        manifest: ManifestArgs,
    },

    /// Print the package.json that an export would write.
    #[command(after_help = PREVIEW_EXAMPLES)]
    Preview {
        /// Package directory (defaults to current directory).
        path: Option<String>,

        #[command(flatten)]
        manifest: ManifestArgs,
    },

    /// Create a draft package.json with placeholder defaults.
    #[command(after_help = INIT_EXAMPLES)]
    Init {
        /// Package directory (defaults to current directory).
        path: Option<String>,

        /// Overwrite an existing draft.
        #[arg(short, long)]
        force: bool,

        #[command(flatten)]
        manifest: ManifestArgs,
    },
}

/// Manifest field overrides, applied on top of the draft `package.json`.
#[derive(Debug, Default, Args)]
pub struct ManifestArgs {
    /// Package name (reverse-domain identifier, lowercased).
    #[arg(long)]
    pub name: Option<String>,

    /// Human-readable display name.
    #[arg(long = "display-name")]
    pub display_name: Option<String>,

    /// Semantic version of the package.
    #[arg(long = "package-version")]
    pub package_version: Option<String>,

    /// Editor compatibility tag.
    #[arg(long)]
    pub unity: Option<String>,

    /// Package description.
    #[arg(long)]
    pub description: Option<String>,

    /// Keyword (repeatable); replaces the draft's keyword list.
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Package category.
    #[arg(long)]
    pub category: Option<String>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ManifestArgs {
    /// Apply the overrides to a manifest.
    pub fn apply(&self, manifest: &mut PackageManifest) {
        if let Some(name) = &self.name {
            manifest.name = name.to_lowercase();
        }
        if let Some(display_name) = &self.display_name {
            manifest.display_name = display_name.clone();
        }
        if let Some(version) = &self.package_version {
            manifest.version = version.clone();
        }
        if let Some(unity) = &self.unity {
            manifest.unity = unity.clone();
        }
        if let Some(description) = &self.description {
            manifest.description = description.clone();
        }
        if !self.keywords.is_empty() {
            manifest.keywords = self.keywords.clone();
        }
        if let Some(category) = &self.category {
            manifest.category = category.clone();
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let args = ManifestArgs {
            name: Some("Com.Example.Tools".into()),
            package_version: Some("2.0.0".into()),
            keywords: vec!["editor".into()],
            ..ManifestArgs::default()
        };

        let mut manifest = PackageManifest::default();
        args.apply(&mut manifest);

        assert_eq!(manifest.name, "com.example.tools");
        assert_eq!(manifest.version, "2.0.0");
        assert_eq!(manifest.keywords, vec!["editor".to_string()]);
        // Untouched fields keep their draft values
        assert_eq!(manifest.display_name, "Package Name");
    }
}
