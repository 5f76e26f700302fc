use serde::{Deserialize, Serialize};

/// A searchable, selectable employee record.
///
/// Identity is the `id`; two records with the same id are the same
/// employee for selection purposes even if their display fields differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    /// Employee number shown in the picker's first column.
    #[serde(default)]
    pub emp_no: String,
    pub name: String,
    #[serde(default, alias = "dept")]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            emp_no: String::new(),
            name: name.into(),
            department: None,
            position: None,
            email: None,
        }
    }

    pub fn with_emp_no(mut self, emp_no: impl Into<String>) -> Self {
        self.emp_no = emp_no.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Secondary display line: "department · position", skipping blanks.
    pub fn meta_line(&self) -> String {
        [self.department.as_deref(), self.position.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ")
    }

    /// Case-insensitive substring match over the fields the demo
    /// directories search: name, employee number, department and email.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&needle);

        contains(&self.name)
            || contains(&self.emp_no)
            || self.department.as_deref().is_some_and(contains)
            || self.email.as_deref().is_some_and(contains)
    }
}
