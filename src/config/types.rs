use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::directory::{
    load_roster, sample_roster, EmployeeDirectory, FailingDirectory, MockDirectory, RosterError,
};
use crate::search::DEFAULT_DEBOUNCE_MS;
use crate::ui::employee_search::SearchModalOptions;
use crate::ui::user_picker::{PickerOptions, PickerValue, DEFAULT_PAGE_SIZE};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Employee search dialog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a typed query is searched (default: 250).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_search_title")]
    pub title: String,
    #[serde(default = "default_search_description")]
    pub description: String,
    #[serde(default)]
    pub initial_query: String,
    #[serde(default = "default_search_placeholder")]
    pub placeholder: String,
}

/// User picker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_emp_no_placeholder")]
    pub emp_no_placeholder: String,
    #[serde(default = "default_name_placeholder")]
    pub name_placeholder: String,
    #[serde(default = "default_modal_title")]
    pub modal_title: String,
    #[serde(default = "default_true")]
    pub show_emp_no: bool,
    #[serde(default)]
    pub disabled: bool,
    /// Table rows per page (default: 8).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Employee number the field starts with.
    #[serde(default)]
    pub emp_no: String,
    /// Name the field starts with.
    #[serde(default)]
    pub name: String,
}

/// Where the demo gets its employees from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Simulated lookup latency in milliseconds (default: 500).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// JSON array of employees to search instead of the built-in sample.
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
    /// When set, every lookup fails with this message.
    #[serde(default)]
    pub fail_with: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            title: default_search_title(),
            description: default_search_description(),
            initial_query: String::new(),
            placeholder: default_search_placeholder(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            emp_no_placeholder: default_emp_no_placeholder(),
            name_placeholder: default_name_placeholder(),
            modal_title: default_modal_title(),
            show_emp_no: true,
            disabled: false,
            page_size: default_page_size(),
            emp_no: String::new(),
            name: String::new(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            roster_path: None,
            fail_with: None,
        }
    }
}

impl SearchConfig {
    pub fn modal_options(&self) -> SearchModalOptions {
        SearchModalOptions {
            title: self.title.clone(),
            description: self.description.clone(),
            initial_query: self.initial_query.clone(),
            placeholder: self.placeholder.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

impl PickerConfig {
    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            emp_no_placeholder: self.emp_no_placeholder.clone(),
            name_placeholder: self.name_placeholder.clone(),
            modal_title: self.modal_title.clone(),
            show_emp_no: self.show_emp_no,
            disabled: self.disabled,
            page_size: self.page_size,
        }
    }

    pub fn initial_value(&self) -> PickerValue {
        PickerValue::new(self.emp_no.clone(), self.name.clone())
    }
}

impl DirectoryConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Build the directory the demo searches.
    ///
    /// `fail_with` wins over everything; otherwise the roster file (or the
    /// built-in sample) is searched with the configured latency.
    pub fn build(&self) -> Result<Arc<dyn EmployeeDirectory>, RosterError> {
        if let Some(message) = &self.fail_with {
            return Ok(Arc::new(FailingDirectory::new(
                Some(message.clone()),
                self.latency(),
            )));
        }

        let roster = match &self.roster_path {
            Some(path) => load_roster(path)?,
            None => sample_roster(),
        };
        Ok(Arc::new(MockDirectory::new(roster, self.latency())))
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_search_title() -> String {
    "사원 검색".to_string()
}

fn default_search_description() -> String {
    "이름/부서/이메일로 검색 후 사원을 선택하세요.".to_string()
}

fn default_search_placeholder() -> String {
    "예) 김철수 / 개발1팀 / chulsoo@company.com".to_string()
}

fn default_emp_no_placeholder() -> String {
    "사번".to_string()
}

fn default_name_placeholder() -> String {
    "이름".to_string()
}

fn default_modal_title() -> String {
    "사용자 검색".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_latency_ms() -> u64 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_defaults() {
        let config = Config::default();
        assert_eq!(config.search.modal_options(), SearchModalOptions::default());
        assert_eq!(config.picker.picker_options(), PickerOptions::default());
        assert!(config.picker.initial_value().is_empty());
        assert_eq!(config.directory.latency_ms, 500);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            initial_query = "개발"

            [picker]
            show_emp_no = false
            emp_no = "10001"
            name = "김철수"
            "#,
        )
        .unwrap();

        assert_eq!(config.search.initial_query, "개발");
        assert_eq!(config.search.debounce_ms, 250);
        assert!(!config.picker.show_emp_no);
        assert_eq!(config.picker.page_size, 8);
        assert_eq!(
            config.picker.initial_value(),
            PickerValue::new("10001", "김철수")
        );
        assert_eq!(config.directory, DirectoryConfig::default());
    }
}
