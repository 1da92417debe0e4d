/// Holds at most one record targeted by a row action.
///
/// Setting a value replaces the previous one; there is no accumulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<T> {
    value: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}
