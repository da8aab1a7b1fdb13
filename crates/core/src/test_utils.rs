//! Test helpers

use std::sync::{Arc, Mutex, MutexGuard};

use crate::Presenter;

/// A single presenter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call<E> {
    Set(E),
    Clear(E),
}

#[derive(Debug)]
struct Markers<E> {
    active: Vec<E>,
    calls: Vec<Call<E>>,
}

/// In-memory presenter that remembers which elements carry the active marker.
///
/// Clones share the same state, so a test can keep one handle while the controller
/// owns another.
#[derive(Debug)]
pub struct RecordingPresenter<E> {
    markers: Arc<Mutex<Markers<E>>>,
}

impl<E> Default for RecordingPresenter<E> {
    fn default() -> Self {
        Self {
            markers: Arc::new(Mutex::new(Markers {
                active: Vec::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl<E> Clone for RecordingPresenter<E> {
    fn clone(&self) -> Self {
        Self {
            markers: self.markers.clone(),
        }
    }
}

impl<E: Clone> RecordingPresenter<E> {
    fn markers(&self) -> MutexGuard<'_, Markers<E>> {
        self.markers.lock().unwrap()
    }

    /// Returns the elements that currently carry the active marker.
    #[must_use]
    pub fn active(&self) -> Vec<E> {
        self.markers().active.clone()
    }

    /// Returns all recorded invocations in their order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call<E>> {
        self.markers().calls.clone()
    }

    pub fn reset_calls(&self) {
        self.markers().calls.clear();
    }
}

impl<E: Clone + PartialEq> Presenter<E> for RecordingPresenter<E> {
    fn set_active(&mut self, element: &E) {
        let mut markers = self.markers();
        if !markers.active.contains(element) {
            markers.active.push(element.clone());
        }
        markers.calls.push(Call::Set(element.clone()));
    }

    fn clear_active(&mut self, element: &E) {
        let mut markers = self.markers();
        markers.active.retain(|x| x != element);
        markers.calls.push(Call::Clear(element.clone()));
    }
}

#[test]
fn test_recording_presenter_shares_state() {
    let handle = RecordingPresenter::default();
    let mut presenter = handle.clone();

    presenter.set_active(&1);
    presenter.set_active(&1);
    presenter.set_active(&2);
    presenter.clear_active(&1);

    assert_eq!(handle.active(), vec![2]);
    assert_eq!(
        handle.calls(),
        vec![Call::Set(1), Call::Set(1), Call::Set(2), Call::Clear(1)]
    );
}
