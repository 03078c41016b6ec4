// File: src/state.rs
// Purpose: Form state container - values, flags, errors and the submit gate

use crate::config::{FormConfig, RevalidateScope, ValidationMode};
use crate::error::{FormError, Result};
use crate::field_array::EntryId;
use crate::path::{ArrayPath, FieldKey, FieldPath};
use crate::record::{FieldValue, Hobby, Record};
use crate::registration::Registration;
use crate::schema;
use crate::validation::ValidationErrors;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Where the container is in the submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
}

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome<T> {
    /// Validation passed and the submission went through
    Accepted(T),
    /// Validation failed; nothing was submitted
    Rejected {
        errors: ValidationErrors,
        focus: Option<FieldPath>,
    },
    /// A submission was already in flight
    Ignored,
}

impl<T> SubmitOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// A submission that passed validation and has not settled yet
///
/// While one exists the container stays in [`SubmitState::Submitting`] and
/// ignores further submit attempts. Settle it with
/// [`FormState::finish_submit`] or [`FormState::fail_submit`].
#[derive(Debug)]
#[must_use = "a pending submission keeps the form in the submitting state until settled"]
pub struct PendingSubmission {
    registration: Registration,
}

impl PendingSubmission {
    pub fn registration(&self) -> &Registration {
        &self.registration
    }
}

/// What a write invalidated
#[derive(Debug, Clone, Copy)]
enum Change {
    Field(FieldKey),
    Hobbies,
}

/// Owns the record for one form session
pub struct FormState {
    record: Record,
    defaults: Record,
    config: FormConfig,
    errors: ValidationErrors,
    touched: HashSet<FieldKey>,
    edited: HashSet<FieldKey>,
    submit_state: SubmitState,
    submit_count: u32,
    submit_successful: bool,
    focus: Option<FieldPath>,
}

impl FormState {
    /// Start a session from an empty record
    pub fn new(config: FormConfig) -> Self {
        Self::with_defaults(Record::default(), config)
    }

    /// Start a session whose fields begin at (and reset to) `defaults`
    pub fn with_defaults(defaults: Record, config: FormConfig) -> Self {
        let record = defaults.clone();
        let errors = schema::validate(&record);

        Self {
            record,
            defaults,
            config,
            errors,
            touched: HashSet::new(),
            edited: HashSet::new(),
            submit_state: SubmitState::Idle,
            submit_count: 0,
            submit_successful: false,
            focus: None,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn defaults(&self) -> &Record {
        &self.defaults
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Every current error, whether or not it is visible yet
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, path: FieldPath) -> Option<&str> {
        self.errors.get(path)
    }

    /// Error for `path` if the validation mode says it should be shown
    pub fn visible_error(&self, path: FieldPath) -> Option<&str> {
        let message = self.errors.get(path)?;
        self.is_error_visible(path).then_some(message)
    }

    /// Errors the view should display right now
    pub fn visible_errors(&self) -> ValidationErrors {
        let mut visible = ValidationErrors::new();
        for (path, message) in self.errors.iter() {
            if self.is_error_visible(path) {
                visible.insert(path, message);
            }
        }
        visible
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_error_visible(&self, path: FieldPath) -> bool {
        if self.submit_count > 0 {
            return true;
        }

        let Ok(key) = self.record.key_for(path) else {
            return false;
        };
        match self.config.validation.mode {
            ValidationMode::All => true,
            ValidationMode::OnSubmit => false,
            ValidationMode::OnChange => self.edited.contains(&key),
            ValidationMode::OnTouched => self.touched.contains(&key),
        }
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Read/write handle for the scalar field at `path`
    ///
    /// An index-qualified hobby path is resolved to its entry once; the binding
    /// keeps following that entry if others are removed or moved.
    pub fn bind(&mut self, path: FieldPath) -> Result<Binding<'_>> {
        if path == FieldPath::Hobbies {
            return Err(FormError::NotScalar(path));
        }
        let key = self.record.key_for(path)?;
        Ok(Binding { form: self, key })
    }

    /// Read/write handle for the name of one hobby entry
    pub fn bind_hobby(&mut self, id: EntryId) -> Result<Binding<'_>> {
        if !self.record.hobbies.contains(id) {
            return Err(FormError::UnknownEntry(id));
        }
        Ok(Binding {
            form: self,
            key: FieldKey::HobbyName(id),
        })
    }

    pub fn value(&self, path: FieldPath) -> Result<FieldValue> {
        self.record.get(FieldKey::Scalar(path))
    }

    /// Write the scalar field at `path` and re-validate
    pub fn set_value(&mut self, path: FieldPath, value: impl Into<FieldValue>) -> Result<()> {
        let key = self.record.key_for(path)?;
        self.write(key, value.into())
    }

    /// Mark the field at `path` as touched (blurred)
    pub fn blur(&mut self, path: FieldPath) -> Result<()> {
        let key = self.record.key_for(path)?;
        self.mark_touched(key);
        Ok(())
    }

    pub fn is_touched(&self, path: FieldPath) -> bool {
        self.record
            .key_for(path)
            .is_ok_and(|key| self.touched.contains(&key))
    }

    /// True when the field's value differs from its default
    ///
    /// A hobby entry's default is an empty name.
    pub fn is_dirty(&self, path: FieldPath) -> bool {
        match path {
            FieldPath::Hobbies => !self
                .record
                .hobbies
                .values()
                .eq(self.defaults.hobbies.values()),
            other => self
                .record
                .key_for(other)
                .is_ok_and(|key| self.is_key_dirty(key)),
        }
    }

    /// True when any field differs from its default
    pub fn is_form_dirty(&self) -> bool {
        FieldPath::SCALARS.iter().any(|path| self.is_dirty(*path))
            || self.is_dirty(FieldPath::Hobbies)
    }

    fn is_key_dirty(&self, key: FieldKey) -> bool {
        let default = match key {
            FieldKey::Scalar(_) => self.defaults.get(key).ok(),
            FieldKey::HobbyName(_) => Some(FieldValue::Text(Hobby::default().name)),
        };
        self.record.get(key).ok() != default
    }

    fn write(&mut self, key: FieldKey, value: FieldValue) -> Result<()> {
        self.record.set(key, value)?;
        self.edited.insert(key);
        if let FieldKey::HobbyName(_) = key {
            self.edited.insert(FieldKey::Scalar(FieldPath::Hobbies));
        }
        debug!("Field {:?} updated", key);

        self.apply_derived(key);
        self.revalidate(Change::Field(key));
        Ok(())
    }

    fn mark_touched(&mut self, key: FieldKey) {
        self.touched.insert(key);
        if let FieldKey::HobbyName(_) = key {
            self.touched.insert(FieldKey::Scalar(FieldPath::Hobbies));
        }
    }

    fn forget(&mut self, key: FieldKey) {
        self.touched.remove(&key);
        self.edited.remove(&key);
    }

    /// Derived state that must change in the same update as its source
    fn apply_derived(&mut self, key: FieldKey) {
        let privacy = FieldKey::Scalar(FieldPath::AcceptPrivacy);
        if key == privacy && !self.record.accept_privacy {
            let description = FieldKey::Scalar(FieldPath::Description);
            self.restore_default(description);
            debug!("Privacy declined, description cleared");
        }
    }

    // =========================================================================
    // Field arrays
    // =========================================================================

    /// Append an element and return its stable identifier
    pub fn append_element(&mut self, array: ArrayPath, element: Hobby) -> EntryId {
        let id = match array {
            ArrayPath::Hobbies => self.record.hobbies.push(element),
        };
        self.edited.insert(FieldKey::Scalar(FieldPath::Hobbies));
        debug!("Appended entry {} to {}", id, array);

        self.revalidate(Change::Hobbies);
        id
    }

    /// Remove the element with `id`; other entries keep their ids and values
    pub fn remove_element(&mut self, array: ArrayPath, id: EntryId) -> Result<Hobby> {
        let removed = match array {
            ArrayPath::Hobbies => self.record.hobbies.remove(id),
        }
        .ok_or(FormError::UnknownEntry(id))?;

        self.forget(FieldKey::HobbyName(id));
        self.edited.insert(FieldKey::Scalar(FieldPath::Hobbies));
        debug!("Removed entry {} from {}", id, array);

        self.revalidate(Change::Hobbies);
        Ok(removed)
    }

    /// Move the element with `id` to display position `to`
    pub fn move_element(&mut self, array: ArrayPath, id: EntryId, to: usize) -> Result<()> {
        let moved = match array {
            ArrayPath::Hobbies => self.record.hobbies.move_to(id, to),
        };
        if !moved {
            return Err(FormError::UnknownEntry(id));
        }

        self.edited.insert(FieldKey::Scalar(FieldPath::Hobbies));
        debug!("Moved entry {} of {} to {}", id, array, to);

        self.revalidate(Change::Hobbies);
        Ok(())
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Restore one field to its default, leaving every other field alone
    pub fn reset_field(&mut self, path: FieldPath) -> Result<()> {
        if path == FieldPath::Hobbies {
            let ids = self.record.hobbies.ids().to_vec();
            for id in ids {
                self.forget(FieldKey::HobbyName(id));
            }
            self.forget(FieldKey::Scalar(FieldPath::Hobbies));
            self.record
                .hobbies
                .replace(self.defaults.hobbies.values().cloned().collect::<Vec<_>>());
            debug!("Field {} reset", path);

            self.revalidate(Change::Hobbies);
            return Ok(());
        }

        let key = self.record.key_for(path)?;
        self.restore_default(key);
        debug!("Field {} reset", path);

        self.apply_derived(key);
        self.revalidate(Change::Field(key));
        Ok(())
    }

    /// Restore every field and flag to the state the session started in
    ///
    /// Hobby entries get fresh identifiers; old ones are never handed out again.
    pub fn reset(&mut self) {
        let mut hobbies = std::mem::take(&mut self.record.hobbies);
        hobbies.replace(self.defaults.hobbies.values().cloned().collect::<Vec<_>>());
        self.record = Record {
            hobbies,
            ..self.defaults.clone()
        };

        self.touched.clear();
        self.edited.clear();
        self.submit_count = 0;
        self.submit_successful = false;
        self.focus = None;
        self.errors = schema::validate(&self.record);
        debug!("Form reset");
    }

    fn restore_default(&mut self, key: FieldKey) {
        match key {
            FieldKey::Scalar(FieldPath::Description) => {
                self.record.description = self.defaults.description.clone();
            }
            FieldKey::Scalar(path) => {
                if let Ok(default) = self.defaults.get(key) {
                    // Default and current share a kind, so this cannot mismatch
                    let _ = self.record.set(FieldKey::Scalar(path), default);
                }
            }
            FieldKey::HobbyName(id) => {
                if let Some(hobby) = self.record.hobbies.get_mut(id) {
                    *hobby = Hobby::default();
                }
            }
        }
        self.forget(key);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn revalidate(&mut self, change: Change) {
        if self.config.validation.revalidate == RevalidateScope::Record {
            self.errors = schema::validate(&self.record);
            return;
        }

        match change {
            Change::Hobbies => {
                self.errors.remove_where(FieldPath::is_hobby);
                schema::validate_hobbies(&self.record, &mut self.errors);
            }
            Change::Field(key) => {
                let Some(path) = self.record.path_for(key) else {
                    return;
                };
                self.refresh(path);
                if path == FieldPath::AcceptPrivacy {
                    self.refresh(FieldPath::Description);
                }
            }
        }
    }

    fn refresh(&mut self, path: FieldPath) {
        match schema::validate_field(&self.record, path) {
            Some(message) => self.errors.insert(path, message),
            None => {
                self.errors.remove(path);
            }
        }
    }

    // =========================================================================
    // Submit
    // =========================================================================

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    pub fn is_submit_successful(&self) -> bool {
        self.submit_successful
    }

    /// Field that should receive focus after the last refused submit
    pub fn focused_field(&self) -> Option<FieldPath> {
        self.focus
    }

    /// Validate and, if the record is valid, run `handler` once on its snapshot
    ///
    /// The handler's return value is passed back unchanged in
    /// [`SubmitOutcome::Accepted`].
    pub fn submit<R>(&mut self, handler: impl FnOnce(&Registration) -> R) -> Result<SubmitOutcome<R>> {
        let pending = match self.begin_submit()? {
            SubmitOutcome::Accepted(pending) => pending,
            SubmitOutcome::Rejected { errors, focus } => {
                return Ok(SubmitOutcome::Rejected { errors, focus })
            }
            SubmitOutcome::Ignored => return Ok(SubmitOutcome::Ignored),
        };

        let result = handler(pending.registration());
        self.finish_submit(pending);
        Ok(SubmitOutcome::Accepted(result))
    }

    /// First half of a submit whose handler settles later
    ///
    /// Returns [`SubmitOutcome::Ignored`] while another submission is pending.
    pub fn begin_submit(&mut self) -> Result<SubmitOutcome<PendingSubmission>> {
        if self.submit_state == SubmitState::Submitting {
            warn!("Submit ignored: a submission is already in flight");
            return Ok(SubmitOutcome::Ignored);
        }

        self.submit_state = SubmitState::Validating;
        self.submit_count += 1;
        self.submit_successful = false;
        self.errors = schema::validate(&self.record);

        if !self.errors.is_empty() {
            self.submit_state = SubmitState::Idle;
            self.focus = if self.config.submit.focus_first_error {
                self.errors.first().map(|(path, _)| path)
            } else {
                None
            };
            debug!("Submit refused with {} validation errors", self.errors.len());
            return Ok(SubmitOutcome::Rejected {
                errors: self.errors.clone(),
                focus: self.focus,
            });
        }

        let registration = match Registration::try_from(&self.record) {
            Ok(registration) => registration,
            Err(err) => {
                self.submit_state = SubmitState::Idle;
                return Err(err);
            }
        };

        self.focus = None;
        self.submit_state = SubmitState::Submitting;
        info!("Submitting registration for {}", registration.email);
        Ok(SubmitOutcome::Accepted(PendingSubmission { registration }))
    }

    /// Settle a pending submission as successful
    pub fn finish_submit(&mut self, pending: PendingSubmission) -> Registration {
        self.settle(true);
        pending.registration
    }

    /// Settle a pending submission whose handler failed
    pub fn fail_submit(&mut self, pending: PendingSubmission) -> Registration {
        self.settle(false);
        pending.registration
    }

    fn settle(&mut self, successful: bool) {
        if self.submit_state != SubmitState::Submitting {
            warn!("Settled a submission that was not in flight");
        }
        self.submit_state = SubmitState::Idle;
        self.submit_successful = successful;
        debug!("Submission settled (successful: {})", successful);
    }
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("errors", &self.errors)
            .field("submit_state", &self.submit_state)
            .field("submit_count", &self.submit_count)
            .finish_non_exhaustive()
    }
}

/// Read/write handle to one scalar field
pub struct Binding<'a> {
    form: &'a mut FormState,
    key: FieldKey,
}

impl<'a> Binding<'a> {
    pub fn key(&self) -> FieldKey {
        self.key
    }

    /// Current index-qualified path, `None` once the entry is gone
    pub fn path(&self) -> Option<FieldPath> {
        self.form.record.path_for(self.key)
    }

    pub fn value(&self) -> Result<FieldValue> {
        self.form.record.get(self.key)
    }

    pub fn set(&mut self, value: impl Into<FieldValue>) -> Result<()> {
        self.form.write(self.key, value.into())
    }

    pub fn blur(&mut self) {
        self.form.mark_touched(self.key);
    }

    pub fn error(&self) -> Option<&str> {
        self.path().and_then(|path| self.form.error(path))
    }

    pub fn visible_error(&self) -> Option<&str> {
        self.path().and_then(|path| self.form.visible_error(path))
    }

    pub fn is_touched(&self) -> bool {
        self.form.touched.contains(&self.key)
    }

    pub fn is_dirty(&self) -> bool {
        self.form.is_key_dirty(self.key)
    }
}
