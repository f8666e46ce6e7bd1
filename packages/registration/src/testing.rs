//! Test doubles for the registration seams.
//!
//! [`MockMemberLibrary`] records every member it is asked to register and
//! can fail on demand or hold a call pending; [`RecordingNotifier`] keeps
//! every toast it was asked to show.

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use uuid::Uuid;

use crate::domain::{Member, RegisteredMember};
use crate::error::RegistrationError;
use crate::library::MemberLibrary;
use crate::notification::{Notifier, Toast};

/// Releases a [`MockMemberLibrary`] call held by [`MockMemberLibrary::held`]
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

/// A mock registration service
#[derive(Default)]
pub struct MockMemberLibrary {
    /// Members passed to `register_member`, in call order
    calls: RefCell<Vec<Member>>,

    /// Message of the server error to return, if any
    failure: Option<String>,

    /// Pending release for the next call
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockMemberLibrary {
    /// Create a mock that accepts every member.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call with a server error.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Hold the next call pending until the returned gate is released.
    pub fn held(self) -> (Self, Gate) {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        (self, Gate(tx))
    }

    pub fn calls(&self) -> Vec<Member> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl MemberLibrary for MockMemberLibrary {
    async fn register_member(
        &self,
        member: &Member,
    ) -> Result<RegisteredMember, RegistrationError> {
        self.calls.borrow_mut().push(member.clone());

        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match &self.failure {
            Some(message) => Err(RegistrationError::Server(message.clone())),
            None => Ok(RegisteredMember {
                id: Uuid::from_u128(self.call_count() as u128),
                status: "PENDING_APPROVAL".to_string(),
            }),
        }
    }
}

/// A notifier that remembers what it showed
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn fire(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}
