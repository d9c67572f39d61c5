/// Appends `element` to `container`, or to a new empty `Vec` when none is given.
///
/// Every `None` call allocates its own vector, so results of separate calls
/// never alias each other.
pub fn append_to<T>(element: T, container: Option<Vec<T>>) -> Vec<T> {
    let mut items = container.unwrap_or_default();
    items.push(element);
    items
}

/// Explicitly shared container that grows across calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedAccumulator<T> {
    items: Vec<T>,
}

impl<T> SharedAccumulator<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, element: T) -> &[T] {
        self.items.push(element);
        tracing::debug!(len = self.items.len(), "shared accumulator grew");
        &self.items
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}
