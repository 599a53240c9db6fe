/// File name of the project manifest searched for by [`crate::locate`].
pub const MANIFEST_FILENAME: &str = "pyproject.toml";

/// Namespace under `[tool]` that holds the scripts section.
pub const TOOL_NAMESPACE: &str = "ppqs";

/// Human-readable name of the scripts section, used in diagnostics.
pub const SCRIPTS_SECTION: &str = "[tool.ppqs.scripts]";
