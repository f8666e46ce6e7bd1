//! Member registration
//!
//! Everything the registration page needs that is not rendering: the
//! `Member`/`Address` domain objects, the typed field view-model, the ordered
//! validation rules, the notification and registration seams, and the
//! submission state machine that ties them together.
//!
//! ```ignore
//! use std::rc::Rc;
//! use registration_core::{RegistrationFields, RegistrationForm, RuleSet};
//!
//! let form = RegistrationForm::new(RuleSet::standard(), Rc::new(library), Rc::new(notifier));
//! let outcome = form.submit(&fields).await;
//! for field in outcome.invalid_fields() {
//!     // mark the input
//! }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fields;
pub mod form;
pub mod library;
pub mod notification;
pub mod testing;
pub mod validation;

pub use client::{GraphQLClient, REGISTER_MEMBER};
pub use config::Config;
pub use domain::{Address, Member, RegisteredMember};
pub use error::{RegistrationError, ValidationFailure, Violation};
pub use fields::{Field, RegistrationFields};
pub use form::{RegistrationForm, SubmissionState, SubmitOutcome};
pub use library::MemberLibrary;
pub use notification::{Notifier, Toast, ToastIcon, ToastPosition};
pub use validation::RuleSet;
