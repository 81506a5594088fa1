use form_schema::{step_index_of, FormSchema, Step, ValidationResult, STEPS};
use shared::{
    domain::{FieldName, FieldValue},
    draft::DraftRecord,
    protocol::{FormSubmission, SubmitAck},
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    error::{ControllerError, SubmitError},
    submitter::{FailureNotice, FormSubmitter},
};

/// Index of the terminal "complete" pseudo-step.
pub const COMPLETE_INDEX: usize = STEPS.len();
const LAST_STEP_INDEX: usize = STEPS.len() - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced(StepChange),
    Blocked(ValidationResult),
    AtLastStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmitAck),
    Failed(FailureNotice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmissionPhase {
    Editing,
    Pending { generation: u64 },
    Submitted,
}

/// Only the ticket of the current attempt can complete it.
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    generation: u64,
    submission: FormSubmission,
}

impl SubmissionTicket {
    pub fn submission(&self) -> &FormSubmission {
        &self.submission
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    FieldUpdated { field: FieldName },
    StepChanged(StepChange),
    StepBlocked { step: usize, errors: ValidationResult },
    SubmitGateChanged(bool),
    SubmissionStarted,
    Submitted { message: String },
    SubmissionFailed(FailureNotice),
    Reset,
}

pub struct StepController {
    session_id: Uuid,
    schema: FormSchema,
    current: usize,
    previous: usize,
    draft: DraftRecord,
    errors: ValidationResult,
    submit_ready: bool,
    phase: SubmissionPhase,
    generation: u64,
    notice: Option<FailureNotice>,
    events: broadcast::Sender<ControllerEvent>,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new(FormSchema::standard())
    }
}

impl StepController {
    pub fn new(schema: FormSchema) -> Self {
        Self::with_draft(schema, DraftRecord::default())
    }

    pub fn with_draft(schema: FormSchema, draft: DraftRecord) -> Self {
        let (events, _) = broadcast::channel(64);
        let submit_ready = schema.validate_all(&draft).is_valid();
        Self {
            session_id: Uuid::new_v4(),
            schema,
            current: 0,
            previous: 0,
            draft,
            errors: ValidationResult::new(),
            submit_ready,
            phase: SubmissionPhase::Editing,
            generation: 0,
            notice: None,
            events,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ControllerEvent> {
        self.events.subscribe()
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn previous_index(&self) -> usize {
        self.previous
    }

    pub fn current_step(&self) -> Option<&'static Step> {
        STEPS.get(self.current)
    }

    pub fn direction(&self) -> Direction {
        if self.current >= self.previous {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn step_statuses(&self) -> Vec<(&'static Step, StepStatus)> {
        STEPS
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let status = if self.current > index {
                    StepStatus::Complete
                } else if self.current == index {
                    StepStatus::Current
                } else {
                    StepStatus::Upcoming
                };
                (step, status)
            })
            .collect()
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Pending { .. })
    }

    pub fn notice(&self) -> Option<&FailureNotice> {
        self.notice.as_ref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_ready && self.phase == SubmissionPhase::Editing
    }

    pub fn update_field(
        &mut self,
        field: FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<(), ControllerError> {
        self.ensure_open()?;
        self.draft.set(field, value.into())?;

        if let Some(step) = step_index_of(field) {
            let fields = STEPS[step].fields;
            let fresh = self.schema.validate_fields(&self.draft, fields);
            self.errors
                .replace_scope(&self.schema.scope(fields), &fresh);
        }
        self.refresh_gate();
        debug!(session = %self.session_id, %field, "form field updated");
        self.emit(ControllerEvent::FieldUpdated { field });
        Ok(())
    }

    pub fn advance(&mut self) -> Result<AdvanceOutcome, ControllerError> {
        self.ensure_open()?;
        let Some(step) = self.current_step() else {
            return Err(ControllerError::AlreadySubmitted);
        };

        let result = self.schema.validate_fields(&self.draft, step.fields);
        self.errors
            .replace_scope(&self.schema.scope(step.fields), &result);

        if !result.is_valid() {
            info!(
                session = %self.session_id,
                step = step.id,
                errors = result.len(),
                "step advance blocked by validation"
            );
            self.emit(ControllerEvent::StepBlocked {
                step: self.current,
                errors: result.clone(),
            });
            return Ok(AdvanceOutcome::Blocked(result));
        }

        if self.current >= LAST_STEP_INDEX {
            return Ok(AdvanceOutcome::AtLastStep);
        }

        Ok(AdvanceOutcome::Advanced(self.move_to(self.current + 1)))
    }

    pub fn retreat(&mut self) -> Result<Option<StepChange>, ControllerError> {
        self.ensure_open()?;
        if self.current == 0 {
            return Ok(None);
        }
        Ok(Some(self.move_to(self.current - 1)))
    }

    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, ControllerError> {
        match self.phase {
            SubmissionPhase::Submitted => return Err(ControllerError::AlreadySubmitted),
            SubmissionPhase::Pending { .. } => return Err(ControllerError::SubmissionPending),
            SubmissionPhase::Editing => {}
        }

        let submission = match self.schema.parse(&self.draft) {
            Ok(submission) => submission,
            Err(result) => {
                self.errors = result.clone();
                self.refresh_gate();
                return Err(ControllerError::Invalid(result));
            }
        };

        self.generation += 1;
        self.phase = SubmissionPhase::Pending {
            generation: self.generation,
        };
        self.notice = None;
        info!(session = %self.session_id, attempt = self.generation, "form submission started");
        self.emit(ControllerEvent::SubmissionStarted);
        self.emit(ControllerEvent::SubmitGateChanged(false));

        Ok(SubmissionTicket {
            generation: self.generation,
            submission,
        })
    }

    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<SubmitAck, SubmitError>,
    ) -> Result<SubmitOutcome, ControllerError> {
        if self.phase
            != (SubmissionPhase::Pending {
                generation: ticket.generation,
            })
        {
            debug!(
                session = %self.session_id,
                attempt = ticket.generation,
                "ignoring result of abandoned submission"
            );
            return Err(ControllerError::StaleSubmission);
        }

        match outcome {
            Ok(ack) => {
                self.draft = DraftRecord::default();
                self.errors.clear();
                self.notice = None;
                self.phase = SubmissionPhase::Submitted;
                self.submit_ready = false;
                self.previous = self.current;
                self.current = COMPLETE_INDEX;
                info!(session = %self.session_id, message = %ack.message, "form submitted");
                self.emit(ControllerEvent::Submitted {
                    message: ack.message.clone(),
                });
                Ok(SubmitOutcome::Accepted(ack))
            }
            Err(err) => {
                let notice = FailureNotice::from(&err);
                self.phase = SubmissionPhase::Editing;
                self.notice = Some(notice.clone());
                warn!(session = %self.session_id, error = %err, "form submission failed");
                self.emit(ControllerEvent::SubmissionFailed(notice.clone()));
                self.emit(ControllerEvent::SubmitGateChanged(self.submit_enabled()));
                Ok(SubmitOutcome::Failed(notice))
            }
        }
    }

    pub async fn submit(
        &mut self,
        submitter: &dyn FormSubmitter,
    ) -> Result<SubmitOutcome, ControllerError> {
        let ticket = self.begin_submission()?;
        let outcome = submitter.submit(ticket.submission()).await;
        self.complete_submission(ticket, outcome)
    }

    pub fn reset(&mut self) {
        if self.is_pending() {
            debug!(session = %self.session_id, attempt = self.generation, "abandoning in-flight submission");
        }
        self.draft = DraftRecord::default();
        self.errors.clear();
        self.notice = None;
        self.phase = SubmissionPhase::Editing;
        self.current = 0;
        self.previous = 0;
        self.refresh_gate();
        self.emit(ControllerEvent::Reset);
    }

    fn ensure_open(&self) -> Result<(), ControllerError> {
        if self.is_submitted() {
            Err(ControllerError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }

    fn move_to(&mut self, to: usize) -> StepChange {
        let change = StepChange {
            from: self.current,
            to,
        };
        self.previous = self.current;
        self.current = to;
        info!(session = %self.session_id, from = change.from, to = change.to, "form step changed");
        self.emit(ControllerEvent::StepChanged(change));
        change
    }

    fn refresh_gate(&mut self) {
        let before = self.submit_enabled();
        self.submit_ready = self.schema.validate_all(&self.draft).is_valid();
        let after = self.submit_enabled();
        if before != after {
            self.emit(ControllerEvent::SubmitGateChanged(after));
        }
    }

    fn emit(&self, event: ControllerEvent) {
        let _ = self.events.send(event);
    }
}
