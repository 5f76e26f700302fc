//! Command-line interface of the demo binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "staffpick",
    version,
    about = "Employee search and user picker widgets in the terminal"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub demo: DemoCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum DemoCommand {
    /// Run the employee search dialog
    Search(SearchArgs),
    /// Run the user picker field
    Picker(PickerArgs),
}

/// Directory overrides shared by both demos.
#[derive(Debug, Clone, Default, Args)]
pub struct DirectoryArgs {
    /// Make every search fail with this message
    #[arg(long, value_name = "MESSAGE")]
    pub fail: Option<String>,

    /// Simulated search latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    /// Query typed into the dialog when it opens
    #[arg(long, value_name = "QUERY")]
    pub initial_query: Option<String>,

    #[command(flatten)]
    pub directory: DirectoryArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PickerArgs {
    /// Hide the employee-number box
    #[arg(long)]
    pub hide_emp_no: bool,

    /// Disable the search trigger
    #[arg(long)]
    pub disabled: bool,

    /// Title of the picker dialog
    #[arg(long, value_name = "TITLE")]
    pub modal_title: Option<String>,

    /// Employee number the field starts with
    #[arg(long, value_name = "EMP_NO")]
    pub emp_no: Option<String>,

    /// Name the field starts with
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Let the picker own its value instead of the demo holding it
    #[arg(long)]
    pub uncontrolled: bool,

    #[command(flatten)]
    pub directory: DirectoryArgs,
}

impl DirectoryArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(message) = &self.fail {
            config.directory.fail_with = Some(message.clone());
        }
        if let Some(latency_ms) = self.latency_ms {
            config.directory.latency_ms = latency_ms;
        }
    }
}

impl DemoCommand {
    /// Layer command-line flags over the loaded config.
    pub fn apply(&self, config: &mut Config) {
        match self {
            DemoCommand::Search(args) => {
                if let Some(query) = &args.initial_query {
                    config.search.initial_query = query.clone();
                }
                args.directory.apply(config);
            }
            DemoCommand::Picker(args) => {
                if args.hide_emp_no {
                    config.picker.show_emp_no = false;
                }
                if args.disabled {
                    config.picker.disabled = true;
                }
                if let Some(title) = &args.modal_title {
                    config.picker.modal_title = title.clone();
                }
                if let Some(emp_no) = &args.emp_no {
                    config.picker.emp_no = emp_no.clone();
                }
                if let Some(name) = &args.name {
                    config.picker.name = name.clone();
                }
                args.directory.apply(config);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_flags_override_config() {
        let cli = Cli::parse_from([
            "staffpick",
            "search",
            "--initial-query",
            "개발",
            "--fail",
            "서버 오류",
            "--latency-ms",
            "0",
        ]);
        let mut config = Config::default();
        cli.demo.apply(&mut config);

        assert_eq!(config.search.initial_query, "개발");
        assert_eq!(config.directory.fail_with.as_deref(), Some("서버 오류"));
        assert_eq!(config.directory.latency_ms, 0);
    }

    #[test]
    fn picker_flags_override_config() {
        let cli = Cli::parse_from([
            "staffpick",
            "--config",
            "/tmp/x.toml",
            "picker",
            "--hide-emp-no",
            "--modal-title",
            "담당자 선택",
            "--emp-no",
            "10001",
            "--name",
            "김철수",
        ]);
        let mut config = Config::default();
        cli.demo.apply(&mut config);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        assert!(!config.picker.show_emp_no);
        assert!(!config.picker.disabled);
        assert_eq!(config.picker.modal_title, "담당자 선택");
        assert_eq!(config.picker.emp_no, "10001");
        assert_eq!(config.picker.name, "김철수");
    }

    #[test]
    fn unset_flags_leave_config_alone() {
        let cli = Cli::parse_from(["staffpick", "search"]);
        let mut config = Config::default();
        cli.demo.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
