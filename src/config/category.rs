//! Classification of catalog fragments into report categories.

/// Label used when no rule matches.
pub const GENERAL: &str = "General";

/// Ordered `(substrings, label)` rules; the first rule with any matching
/// substring wins.
///
/// Order is significant: a fragment may contain the substrings of several
/// rules (`ssh/git_key` is Version Control, not Security).
const RULES: &[(&[&str], &str)] = &[
    (&["vscode"], "IDE"),
    (&["intellij"], "IDE"),
    (&["vim"], "Editor"),
    (&["emacs"], "Editor"),
    (&["bash", "zsh"], "Shell"),
    (&["tmux"], "Terminal"),
    (&["git"], "Version Control"),
    (&["ssh"], "Security"),
    (&["chrome", "firefox"], "Browser"),
    (&["npm", "yarn"], "Package Manager"),
    (&["pip"], "Package Manager"),
    (&["docker"], "Container"),
    (&["kubectl"], "Kubernetes"),
    (&["helm"], "Kubernetes"),
    (&["terraform"], "Infrastructure"),
    (&["aws"], "Cloud"),
];

/// Classify a path fragment by case-sensitive substring match.
///
/// # Examples
///
/// ```
/// use profilesync::config::category::classify;
///
/// assert_eq!(classify("git/.gitconfig"), "Version Control");
/// assert_eq!(classify("vscode/settings.json"), "IDE");
/// assert_eq!(classify("nano/.nanorc"), "General");
/// ```
#[must_use]
pub fn classify(fragment: &str) -> &'static str {
    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| fragment.contains(n)))
        .map_or(GENERAL, |&(_, label)| label)
}
