/// Selection sink: where "select" actions on report rows end up.

use super::ObjectId;

/// Accepts objects to select in the host
pub trait SelectionSink {
    /// Select one object.
    ///
    /// With `append`, toggles the object's membership in the current
    /// selection instead of replacing it.
    fn select_object(&mut self, object: ObjectId, append: bool);

    /// Select several objects.
    ///
    /// With `append`, adds them to the current selection.
    fn select_objects(&mut self, objects: &[ObjectId], append: bool);
}

/// In-memory selection, ordered by insertion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    objects: Vec<ObjectId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected objects
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    pub fn contains(&self, object: ObjectId) -> bool {
        self.objects.contains(&object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl SelectionSink for SelectionSet {
    fn select_object(&mut self, object: ObjectId, append: bool) {
        if !append {
            self.objects.clear();
            self.objects.push(object);
        } else if let Some(index) = self.objects.iter().position(|&o| o == object) {
            self.objects.remove(index);
        } else {
            self.objects.push(object);
        }
    }

    fn select_objects(&mut self, objects: &[ObjectId], append: bool) {
        if !append {
            self.objects.clear();
        }
        for &object in objects {
            if !self.objects.contains(&object) {
                self.objects.push(object);
            }
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
