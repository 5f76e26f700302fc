use crate::directory::Employee;

/// What the picker field holds: an employee number and name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickerValue {
    pub emp_no: String,
    pub name: String,
}

impl PickerValue {
    pub fn new(emp_no: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            emp_no: emp_no.into(),
            name: name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.emp_no.is_empty() && self.name.is_empty()
    }
}

impl From<&Employee> for PickerValue {
    fn from(employee: &Employee) -> Self {
        Self::new(employee.emp_no.clone(), employee.name.clone())
    }
}

/// A value that is either owned here or supplied from outside.
///
/// When an external value is present it is what [`get`](Self::get)
/// returns; [`set`](Self::set) then leaves storage alone and only hands
/// the new value back so the caller can report it. Without an external
/// value, `set` also stores it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControllableValue<T> {
    inner: T,
    external: Option<T>,
}

impl<T: Clone> ControllableValue<T> {
    pub fn uncontrolled(initial: T) -> Self {
        Self {
            inner: initial,
            external: None,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    pub fn get(&self) -> &T {
        self.external.as_ref().unwrap_or(&self.inner)
    }

    /// Supply (or withdraw, with `None`) the authoritative external value.
    pub fn set_external(&mut self, external: Option<T>) {
        self.external = external;
    }

    /// Apply a change; returns the value to report to the owner.
    pub fn set(&mut self, next: T) -> T {
        if !self.is_controlled() {
            self.inner = next.clone();
        }
        next
    }
}
