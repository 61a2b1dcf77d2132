//! Flow coordinators
//!
//! A [`Coordinator`] owns the navigation state of one flow. View-models hold
//! a [`SharedCoordinator`] for their flow and call [`Coordinator::navigate`]
//! with a target; they never build screens. Building and showing screens is
//! the job of the [`Presenter`] the coordinator was created with.
//!
//! Coordinators form a tree: a flow can present a child flow, which gets its
//! own coordinator owned by the parent. Dismissing the child tears down the
//! child and everything below it.
//!
//! # Example
//!
//! ```rust
//! use app_ui::coordinator::{Coordinator, RecordingPresenter, Transition};
//! use app_ui::navigation::SettingsTarget;
//! use std::sync::Arc;
//!
//! let presenter = Arc::new(RecordingPresenter::<SettingsTarget>::new());
//! let settings = Coordinator::<SettingsTarget>::new(presenter.clone());
//!
//! settings.navigate(SettingsTarget::Accessibility);
//! assert_eq!(settings.current(), SettingsTarget::Accessibility);
//!
//! // Same target again: no push, only a refresh of the visible screen
//! settings.navigate(SettingsTarget::Accessibility);
//! assert_eq!(settings.depth(), 2);
//! assert_eq!(presenter.last().unwrap().transition, Transition::Refresh);
//! ```

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use crate::navigation::{Flow, NavigationStack, NavigationTarget};

// =============================================================================
// Presentation
// =============================================================================

/// How a target came on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Flow shown for the first time, at its entry target
    Present,
    /// Pushed on top of the previous target
    Push,
    /// Returned to after popping
    Pop,
    /// Swapped in for the previous top target
    Replace,
    /// Already visible, shown again
    Refresh,
}

/// A request to show a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation<T> {
    /// Target to show
    pub target: T,
    /// Transition to use
    pub transition: Transition,
    /// Stack depth after the change
    pub depth: usize,
}

/// Builds and shows screens for a flow
pub trait Presenter<T: NavigationTarget>: Send + Sync {
    /// Show a target
    fn present(&self, presentation: &Presentation<T>);
}

/// Presenter that shows nothing, for headless use
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl<T: NavigationTarget> Presenter<T> for NullPresenter {
    fn present(&self, _presentation: &Presentation<T>) {}
}

/// Presenter that records every presentation
#[derive(Debug)]
pub struct RecordingPresenter<T> {
    log: Mutex<Vec<Presentation<T>>>,
}

impl<T> Default for RecordingPresenter<T> {
    fn default() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Clone> RecordingPresenter<T> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All presentations so far, oldest first
    pub fn presentations(&self) -> Vec<Presentation<T>> {
        self.log.lock().clone()
    }

    /// Most recent presentation
    pub fn last(&self) -> Option<Presentation<T>> {
        self.log.lock().last().cloned()
    }

    /// Number of presentations
    pub fn count(&self) -> usize {
        self.log.lock().len()
    }
}

impl<T: NavigationTarget> Presenter<T> for RecordingPresenter<T> {
    fn present(&self, presentation: &Presentation<T>) {
        self.log.lock().push(presentation.clone());
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Shared handle to a coordinator
pub type SharedCoordinator<T> = Arc<Coordinator<T>>;

/// Type-erased child coordinator
trait ChildFlow: Send + Sync {
    fn flow(&self) -> Flow;
    fn tear_down(&self);
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: NavigationTarget> ChildFlow for Coordinator<T> {
    fn flow(&self) -> Flow {
        T::FLOW
    }

    fn tear_down(&self) {
        Coordinator::tear_down(self);
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Navigation state and transitions for one flow
pub struct Coordinator<T: NavigationTarget> {
    /// Stack of visited targets
    stack: Mutex<NavigationStack<T>>,
    /// Current target, observable
    current: watch::Sender<T>,
    /// Screen construction
    presenter: Arc<dyn Presenter<T>>,
    /// Child flows presented from this one
    children: Mutex<Vec<Arc<dyn ChildFlow>>>,
    /// Cleared on tear down
    active: AtomicBool,
}

impl<T: NavigationTarget> Coordinator<T> {
    /// Create a coordinator and present the flow's entry target
    pub fn new(presenter: Arc<dyn Presenter<T>>) -> SharedCoordinator<T> {
        let entry = T::entry();
        let coordinator = Self::build(presenter, true);

        tracing::debug!("{} flow started at {:?}", T::FLOW.name(), entry);
        coordinator.presenter.present(&Presentation {
            target: entry,
            transition: Transition::Present,
            depth: 1,
        });
        coordinator
    }

    /// Coordinator at the entry target, without presenting it
    fn build(presenter: Arc<dyn Presenter<T>>, active: bool) -> SharedCoordinator<T> {
        let entry = T::entry();
        let (current, _) = watch::channel(entry.clone());
        Arc::new(Self {
            stack: Mutex::new(NavigationStack::new(entry)),
            current,
            presenter,
            children: Mutex::new(Vec::new()),
            active: AtomicBool::new(active),
        })
    }

    /// Flow this coordinator drives
    pub fn flow(&self) -> Flow {
        T::FLOW
    }

    /// Current target
    pub fn current(&self) -> T {
        self.current.borrow().clone()
    }

    /// Subscribe to current-target changes
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.current.subscribe()
    }

    /// Whether the flow is still on screen
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stack depth (1 at the entry target)
    pub fn depth(&self) -> usize {
        self.stack.lock().depth()
    }

    /// Visited targets from entry to current
    pub fn history(&self) -> Vec<T> {
        self.stack.lock().targets()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.lock().can_go_back()
    }

    /// Check a request before acting on it
    ///
    /// Misuse panics in debug builds and is logged and ignored otherwise.
    fn accepts(&self, target: Option<&T>) -> bool {
        let active = self.is_active();
        debug_assert!(active, "navigation on dismissed {} flow", T::FLOW.name());
        if !active {
            tracing::error!("Ignoring navigation on dismissed {} flow", T::FLOW.name());
            return false;
        }

        if let Some(target) = target {
            let valid = target.is_valid();
            debug_assert!(valid, "invalid {} target: {:?}", T::FLOW.name(), target);
            if !valid {
                tracing::error!("Ignoring invalid {} target: {:?}", T::FLOW.name(), target);
                return false;
            }
        }
        true
    }

    /// Publish the new current target and hand it to the presenter
    fn show(&self, target: T, transition: Transition, depth: usize) {
        if transition != Transition::Refresh {
            self.current.send_replace(target.clone());
        }
        tracing::debug!(
            "{} flow: {:?} ({:?}, depth {})",
            T::FLOW.name(),
            target,
            transition,
            depth
        );
        self.presenter.present(&Presentation {
            target,
            transition,
            depth,
        });
    }

    /// Navigate to a target
    ///
    /// Navigating to the current target does not push or notify subscribers;
    /// the presenter is asked to show it again.
    pub fn navigate(&self, target: T) {
        if !self.accepts(Some(&target)) {
            return;
        }

        let (transition, depth) = {
            let mut stack = self.stack.lock();
            if *stack.current() == target {
                (Transition::Refresh, stack.depth())
            } else {
                stack.push(target.clone());
                (Transition::Push, stack.depth())
            }
        };

        self.show(target, transition, depth);
    }

    /// Replace the current target without growing the stack
    pub fn replace(&self, target: T) {
        if !self.accepts(Some(&target)) {
            return;
        }

        let depth = {
            let mut stack = self.stack.lock();
            stack.replace(target.clone());
            stack.depth()
        };

        self.show(target, Transition::Replace, depth);
    }

    /// Go back one target (returns false at the entry target)
    pub fn back(&self) -> bool {
        if !self.accepts(None) {
            return false;
        }

        let popped = {
            let mut stack = self.stack.lock();
            stack.pop().then(|| (stack.current().clone(), stack.depth()))
        };

        match popped {
            Some((target, depth)) => {
                self.show(target, Transition::Pop, depth);
                true
            }
            None => false,
        }
    }

    /// Return to the entry target
    pub fn pop_to_entry(&self) {
        if !self.accepts(None) {
            return;
        }

        let popped = {
            let mut stack = self.stack.lock();
            stack.pop_to_root().then(|| stack.current().clone())
        };

        if let Some(target) = popped {
            self.show(target, Transition::Pop, 1);
        }
    }

    // -------------------------------------------------------------------------
    // Child flows
    // -------------------------------------------------------------------------

    /// Present a child flow, creating its coordinator
    ///
    /// A flow has at most one coordinator under a parent; presenting a flow
    /// that is already up returns the existing coordinator. A dismissed flow
    /// cannot present children; in release builds the returned coordinator
    /// is already torn down and nothing is shown.
    pub fn present_child<U: NavigationTarget>(
        &self,
        presenter: Arc<dyn Presenter<U>>,
    ) -> SharedCoordinator<U> {
        debug_assert!(U::FLOW != T::FLOW, "{} flow cannot present itself", T::FLOW.name());

        if !self.accepts(None) {
            return Coordinator::<U>::build(presenter, false);
        }

        if let Some(existing) = self.child::<U>() {
            tracing::debug!("{} flow already presented", U::FLOW.name());
            return existing;
        }

        let child = Coordinator::<U>::new(presenter);
        self.children.lock().push(child.clone());
        child
    }

    /// Coordinator of a presented child flow
    pub fn child<U: NavigationTarget>(&self) -> Option<SharedCoordinator<U>> {
        let child = self
            .children
            .lock()
            .iter()
            .find(|c| c.flow() == U::FLOW)
            .cloned()?;
        child.into_any().downcast::<Coordinator<U>>().ok()
    }

    /// Flows currently presented from this one
    pub fn child_flows(&self) -> Vec<Flow> {
        self.children.lock().iter().map(|c| c.flow()).collect()
    }

    /// Dismiss a child flow and tear it down (returns false if not presented)
    pub fn dismiss_child(&self, flow: Flow) -> bool {
        let removed = {
            let mut children = self.children.lock();
            children
                .iter()
                .position(|c| c.flow() == flow)
                .map(|index| children.remove(index))
        };

        match removed {
            Some(child) => {
                child.tear_down();
                true
            }
            None => false,
        }
    }

    /// Deactivate this flow and every flow below it
    pub fn tear_down(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        let children = std::mem::take(&mut *self.children.lock());
        for child in children {
            child.tear_down();
        }
        tracing::debug!("{} flow torn down", T::FLOW.name());
    }
}

impl<T: NavigationTarget> std::fmt::Debug for Coordinator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("flow", &T::FLOW)
            .field("current", &*self.current.borrow())
            .field("depth", &self.depth())
            .field("active", &self.is_active())
            .field("children", &self.child_flows())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
