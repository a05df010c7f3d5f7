//! Process configuration resolved once at start-up
//!
//! Every option can be set by flag or by environment variable; the parsed
//! [`Cli`] is turned into an immutable [`Settings`] value that is passed to
//! the server and the logging set-up.

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// The exploration operations, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    DirTree,
    PythonOutline,
    MarkdownOutline,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::DirTree, Tool::PythonOutline, Tool::MarkdownOutline];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::DirTree => "dir_tree",
            Tool::PythonOutline => "python_outline",
            Tool::MarkdownOutline => "markdown_outline",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which tools the server exposes. All are enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSet {
    pub dir_tree: bool,
    pub python_outline: bool,
    pub markdown_outline: bool,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self {
            dir_tree: true,
            python_outline: true,
            markdown_outline: true,
        }
    }
}

impl ToolSet {
    pub fn is_enabled(&self, tool: Tool) -> bool {
        match tool {
            Tool::DirTree => self.dir_tree,
            Tool::PythonOutline => self.python_outline,
            Tool::MarkdownOutline => self.markdown_outline,
        }
    }

    /// Enabled tools in declaration order.
    pub fn enabled(&self) -> Vec<Tool> {
        Tool::ALL
            .into_iter()
            .filter(|tool| self.is_enabled(*tool))
            .collect()
    }
}

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive for stderr, e.g. "info" or "project_explorer=debug".
    pub level: String,
    pub format: LogFormat,
    /// Optional JSON log file, appended to.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive for the log file.
    pub file_level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file: None,
            file_level: "debug".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub tools: ToolSet,
    pub logging: LoggingSettings,
}

#[derive(Parser, Debug)]
#[command(name = "project-explorer")]
#[command(about = "MCP server exposing directory trees and Python/Markdown outlines over stdio")]
#[command(version)]
pub struct Cli {
    /// Expose the dir_tree tool
    #[arg(long = "dir-tree", env = "PROJECT_EXPLORER_DIR_TREE_ENABLED", value_name = "BOOL",
          action = ArgAction::Set, default_value_t = true)]
    pub dir_tree: bool,

    /// Expose the python_outline tool
    #[arg(long = "python-outline", env = "PROJECT_EXPLORER_PYTHON_OUTLINE_ENABLED", value_name = "BOOL",
          action = ArgAction::Set, default_value_t = true)]
    pub python_outline: bool,

    /// Expose the markdown_outline tool
    #[arg(long = "markdown-outline", env = "PROJECT_EXPLORER_MARKDOWN_OUTLINE_ENABLED", value_name = "BOOL",
          action = ArgAction::Set, default_value_t = true)]
    pub markdown_outline: bool,

    /// Log filter for stderr (e.g. "info", "project_explorer=debug")
    #[arg(long = "log-level", env = "PROJECT_EXPLORER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log format for stderr
    #[arg(long = "log-format", env = "PROJECT_EXPLORER_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Also write JSON logs to daily files named after this path
    #[arg(long = "log-file", env = "PROJECT_EXPLORER_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter for the log file
    #[arg(long = "log-file-level", env = "PROJECT_EXPLORER_LOG_FILE_LEVEL", default_value = "debug")]
    pub log_file_level: String,

    /// Print the enabled tool names and exit
    #[arg(long = "list-tools")]
    pub list_tools: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            tools: ToolSet {
                dir_tree: self.dir_tree,
                python_outline: self.python_outline,
                markdown_outline: self.markdown_outline,
            },
            logging: LoggingSettings {
                level: self.log_level.clone(),
                format: self.log_format,
                file: self.log_file.clone(),
                file_level: self.log_file_level.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_toolset_enabled_in_order() {
        let tools = ToolSet {
            python_outline: false,
            ..Default::default()
        };
        assert_eq!(tools.enabled(), vec![Tool::DirTree, Tool::MarkdownOutline]);
        assert!(!tools.is_enabled(Tool::PythonOutline));
    }

    #[test]
    fn test_default_toolset_enables_everything() {
        assert_eq!(ToolSet::default().enabled(), Tool::ALL.to_vec());
    }

    #[test]
    fn test_tool_names() {
        let names: Vec<_> = Tool::ALL.iter().map(Tool::name).collect();
        assert_eq!(names, ["dir_tree", "python_outline", "markdown_outline"]);
        assert_eq!(Tool::DirTree.to_string(), "dir_tree");
    }

    #[test]
    fn test_cli_flags_resolve_to_settings() {
        let cli = Cli::try_parse_from([
            "project-explorer",
            "--dir-tree",
            "false",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-file",
            "/tmp/explorer.log",
        ])
        .unwrap();
        let settings = cli.settings();

        assert!(!settings.tools.dir_tree);
        assert!(settings.tools.python_outline);
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.file, Some(PathBuf::from("/tmp/explorer.log")));
        assert_eq!(settings.logging.file_level, "debug");
    }

    #[test]
    fn test_rejects_non_boolean_tool_flag() {
        assert!(Cli::try_parse_from(["project-explorer", "--dir-tree", "maybe"]).is_err());
    }
}
