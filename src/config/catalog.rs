//! Built-in mapping catalog: which configuration fragments get migrated.
use std::collections::{HashMap, HashSet};

use crate::error::CatalogError;

/// Description used when a source fragment has no catalog description.
pub const DEFAULT_DESCRIPTION: &str = "Configuration file";

/// Built-in `(source, destination, description)` table, in plan order.
///
/// Fragments ending in `/` name directories.
const BUILTIN: &[(&str, &str, &str)] = &[
    // IDE settings
    ("vscode/settings.json", "vscode/settings.json", "VS Code user settings"),
    ("vscode/keybindings.json", "vscode/keybindings.json", "VS Code key bindings"),
    ("intellij/", "intellij/", "IntelliJ IDEA settings"),
    ("vim/.vimrc", "vim/.vimrc", "Vim configuration"),
    ("vim/.vim/", "vim/.vim/", "Vim plugins and additional configs"),
    ("emacs/.emacs", "emacs/.emacs", "Emacs main configuration"),
    ("emacs/.emacs.d/", "emacs/.emacs.d/", "Emacs plugins and additional configs"),
    // Terminal settings
    ("bash/.bashrc", "bash/.bashrc", "Bash shell configuration"),
    ("bash/.bash_profile", "bash/.bash_profile", "Bash profile settings"),
    ("zsh/.zshrc", "zsh/.zshrc", "Zsh shell configuration"),
    (
        "fish/.config/fish/config.fish",
        "fish/.config/fish/config.fish",
        "Fish shell configuration",
    ),
    ("tmux/.tmux.conf", "tmux/.tmux.conf", "Tmux configuration"),
    // Git
    ("git/.gitconfig", "git/.gitconfig", "Git global configuration"),
    ("git/.gitignore_global", "git/.gitignore_global", "Git global ignore patterns"),
    // SSH
    ("ssh/config", "ssh/config", "SSH configuration"),
    ("ssh/id_rsa", "ssh/id_rsa", "SSH private key"),
    ("ssh/id_rsa.pub", "ssh/id_rsa.pub", "SSH public key"),
    // Browser profiles
    ("chrome/Default/", "chrome/Default/", "Chrome browser profile"),
    ("firefox/.mozilla/firefox/", "firefox/.mozilla/firefox/", "Firefox browser profile"),
    // Package managers
    ("npm/.npmrc", "npm/.npmrc", "NPM configuration"),
    ("yarn/.yarnrc", "yarn/.yarnrc", "Yarn configuration"),
    ("pip/pip.conf", "pip/pip.conf", "Python pip configuration (Linux/Mac)"),
    ("pip/pip.ini", "pip/pip.ini", "Python pip configuration (Windows)"),
    // Containers and orchestration
    ("docker/config.json", "docker/config.json", "Docker configuration"),
    ("kubectl/config", "kubectl/config", "Kubectl configuration"),
    ("helm/.helm/", "helm/.helm/", "Helm configuration"),
    // Infrastructure
    ("terraform/.terraform.d/", "terraform/.terraform.d/", "Terraform plugins and configuration"),
    ("terraform/.terraformrc", "terraform/.terraformrc", "Terraform configuration file"),
    // Cloud
    ("aws/credentials", "aws/credentials", "AWS credentials"),
    ("aws/config", "aws/config", "AWS configuration"),
];

/// One source → destination mapping, both relative to a home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Fragment relative to the source home directory.
    pub source: String,
    /// Fragment relative to the destination home directory.
    pub destination: String,
}

impl MappingEntry {
    /// Create a mapping entry.
    #[must_use]
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Immutable, insertion-ordered mapping table plus descriptions keyed by
/// source fragment.
///
/// # Examples
///
/// ```
/// use profilesync::config::catalog::{Catalog, MappingEntry};
///
/// let catalog = Catalog::from_entries(
///     [MappingEntry::new("git/.gitconfig", "git/.gitconfig")],
///     [("git/.gitconfig", "Git global configuration")],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.description("git/.gitconfig"), "Git global configuration");
/// assert_eq!(catalog.description("npm/.npmrc"), "Configuration file");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<MappingEntry>,
    descriptions: HashMap<String, String>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(src, dst, _)| MappingEntry::new(*src, *dst))
                .collect(),
            descriptions: BUILTIN
                .iter()
                .map(|(src, _, desc)| ((*src).to_string(), (*desc).to_string()))
                .collect(),
        }
    }

    /// Build a catalog from explicit entries and a description table.
    ///
    /// Descriptions for fragments not present in `entries` are kept but never
    /// consulted by planning.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Duplicate`] when two entries share a source
    /// fragment and [`CatalogError::EmptyFragment`] when a fragment is empty.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = MappingEntry>,
        descriptions: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for entry in entries {
            if entry.source.is_empty() || entry.destination.is_empty() {
                return Err(CatalogError::EmptyFragment(entry.source));
            }
            if !seen.insert(entry.source.clone()) {
                return Err(CatalogError::Duplicate(entry.source));
            }
            ordered.push(entry);
        }
        Ok(Self {
            entries: ordered,
            descriptions: descriptions
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Human-readable description for a source fragment.
    #[must_use]
    pub fn description(&self, source: &str) -> &str {
        self.descriptions
            .get(source)
            .map_or(DEFAULT_DESCRIPTION, String::as_str)
    }
}
