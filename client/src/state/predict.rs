//! Batch prediction request lifecycle.
//!
//! DESIGN
//! ======
//! Every issued request gets a generation number. A response is applied only
//! if it carries the latest generation, so a slow response to an older batch
//! can never overwrite the result of a newer one. Superseded requests are not
//! cancelled; their responses are simply dropped.
//!
//! A batch equal to the last issued one does not start a new request (the
//! same body would produce the same answer). [`PredictState::retry`] bypasses
//! that check.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use schema::{CveModel, CvePrediction};

/// Request lifecycle as seen by the result view.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<CvePrediction>),
    Failed(String),
}

/// Handle for one issued request. Pass it back to [`PredictState::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictTicket {
    generation: u64,
    batch: Vec<CveModel>,
}

impl PredictTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The batch this request submits.
    #[must_use]
    pub fn batch(&self) -> &[CveModel] {
        &self.batch
    }
}

/// State of the batch predictor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictState {
    generation: u64,
    batch: Vec<CveModel>,
    status: RequestStatus,
}

impl PredictState {
    #[must_use]
    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    /// Latest issued generation; `0` before the first request.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The batch of the latest issued request.
    #[must_use]
    pub fn batch(&self) -> &[CveModel] {
        &self.batch
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading)
    }

    /// Whether the latest request has finished, successfully or not.
    #[must_use]
    pub fn is_fetched(&self) -> bool {
        matches!(self.status, RequestStatus::Loaded(_) | RequestStatus::Failed(_))
    }

    /// Predictions of the latest successful request, aligned with [`Self::batch`].
    #[must_use]
    pub fn data(&self) -> Option<&[CvePrediction]> {
        match &self.status {
            RequestStatus::Loaded(predictions) => Some(predictions.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// React to a new batch.
    ///
    /// An empty batch returns the predictor to idle. A batch equal to the last
    /// issued one is ignored. Anything else starts a new request and returns
    /// its ticket.
    pub fn begin(&mut self, batch: Vec<CveModel>) -> Option<PredictTicket> {
        if batch.is_empty() {
            self.generation += 1;
            self.batch.clear();
            self.status = RequestStatus::Idle;
            return None;
        }
        if self.generation > 0 && batch == self.batch {
            return None;
        }
        Some(self.issue(batch))
    }

    /// Re-issue the last batch as a fresh request.
    pub fn retry(&mut self) -> Option<PredictTicket> {
        if self.batch.is_empty() {
            return None;
        }
        Some(self.issue(self.batch.clone()))
    }

    /// Apply a response. Returns `false` when the ticket has been superseded
    /// and the response was dropped.
    pub fn resolve(&mut self, ticket: &PredictTicket, outcome: Result<Vec<CvePrediction>, String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.status = match outcome {
            Ok(predictions) if predictions.len() == ticket.batch.len() => RequestStatus::Loaded(predictions),
            Ok(predictions) => RequestStatus::Failed(misaligned_message(ticket.batch.len(), predictions.len())),
            Err(message) => RequestStatus::Failed(message),
        };
        true
    }

    fn issue(&mut self, batch: Vec<CveModel>) -> PredictTicket {
        self.generation += 1;
        self.batch.clone_from(&batch);
        self.status = RequestStatus::Loading;
        PredictTicket { generation: self.generation, batch }
    }
}

fn misaligned_message(sent: usize, received: usize) -> String {
    format!("prediction count mismatch: sent {sent} records, received {received} predictions")
}
