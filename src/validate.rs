//! Predicate-driven validation of candidate component lists.
//!
//! Whether a single candidate counts as renderable is delegated to a
//! [`ShapeClassifier`], the capability-classification collaborator: four
//! independent predicates, any one of which is sufficient. The validator
//! itself only scans the list, short-circuiting on the first offender with
//! a logged diagnostic. Invalidity is a normal boolean outcome, never an
//! error; diagnostics are fire-and-forget and must not drive control flow.

use std::fmt;

/// The closed set of recognized renderable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A class-style component definition.
    ClassComponent,
    /// A plain function-style component.
    FunctionComponent,
    /// An instance of a recognized component base type.
    ComponentInstance,
    /// An already-constructed element.
    Element,
}

/// Classifies a single candidate against the recognized renderable shapes.
///
/// Implementors supply the four shape predicates; `classify` and
/// `is_renderable` are derived.
pub trait ShapeClassifier<T> {
    fn is_class_component(&self, candidate: &T) -> bool;
    fn is_function_component(&self, candidate: &T) -> bool;
    fn is_component_instance(&self, candidate: &T) -> bool;
    fn is_element(&self, candidate: &T) -> bool;

    /// First shape the candidate matches, checked in declaration order.
    fn classify(&self, candidate: &T) -> Option<ShapeKind> {
        if self.is_class_component(candidate) {
            Some(ShapeKind::ClassComponent)
        } else if self.is_function_component(candidate) {
            Some(ShapeKind::FunctionComponent)
        } else if self.is_component_instance(candidate) {
            Some(ShapeKind::ComponentInstance)
        } else if self.is_element(candidate) {
            Some(ShapeKind::Element)
        } else {
            None
        }
    }

    /// Logical OR of the four shape predicates.
    fn is_renderable(&self, candidate: &T) -> bool {
        self.classify(candidate).is_some()
    }
}

/// Check that every candidate in a list is a renderable component.
///
/// `None` (absent input) is immediately invalid. Otherwise candidates are
/// scanned in order and the scan stops at the first non-conforming one,
/// logging a diagnostic that identifies it; remaining candidates are not
/// evaluated. An empty list is vacuously valid.
pub fn is_valid_component_list<T, C>(candidates: Option<&[T]>, classifier: &C) -> bool
where
    T: fmt::Debug,
    C: ShapeClassifier<T>,
{
    let Some(candidates) = candidates else {
        log::error!("component list is missing");
        return false;
    };

    for (index, candidate) in candidates.iter().enumerate() {
        if !classifier.is_renderable(candidate) {
            log::error!("candidate {index} is not a renderable component: {candidate:?}");
            return false;
        }
    }

    true
}
