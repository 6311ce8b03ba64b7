//! Run Ask use case.
//!
//! Answers one question file with one model:
//!
//! ```text
//! load question ─► build payload ─► submit ─► write transcript
//!                                     │
//!                                     └─(request error)─► write error record
//! ```
//!
//! A question that cannot be loaded stops the run before any request is
//! made and nothing is written. A failed request is not an error of the
//! use case: it is recorded on disk and reported as
//! [`AskOutcome::Failed`]. Only persistence failures (and the input
//! failure above) come back as [`RunAskError`].

use crate::config::AskParams;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::ports::question_source::{QuestionError, QuestionSource};
use crate::ports::transcript_store::{PersistenceError, TranscriptStore};
use dsa_ask_domain::{
    ErrorRecord, Model, ModelResponse, PromptTemplate, Question, TranscriptRecord,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a run without a transcript or error record.
#[derive(Error, Debug)]
pub enum RunAskError {
    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Input for the [`RunAskUseCase`].
#[derive(Debug, Clone)]
pub struct RunAskInput {
    /// Name of the question file inside the question source.
    pub question_file: String,
    /// Model to ask.
    pub model: Model,
    /// Temperature and instruction.
    pub params: AskParams,
}

impl RunAskInput {
    pub fn new(question_file: impl Into<String>, model: Model) -> Self {
        Self {
            question_file: question_file.into(),
            model,
            params: AskParams::default(),
        }
    }

    pub fn with_params(mut self, params: AskParams) -> Self {
        self.params = params;
        self
    }
}

/// How a run that got as far as the request ended.
#[derive(Debug)]
pub enum AskOutcome {
    /// The model answered and the transcript was written.
    Answered {
        question: Question,
        response: ModelResponse,
        transcript: PathBuf,
    },
    /// The request failed and an error record was written instead.
    Failed {
        question: Question,
        error: GatewayError,
        error_file: PathBuf,
    },
}

/// Use case for asking a single question.
pub struct RunAskUseCase {
    questions: Arc<dyn QuestionSource>,
    gateway: Arc<dyn LlmGateway>,
    store: Arc<dyn TranscriptStore>,
    clock: Arc<dyn Clock>,
}

impl RunAskUseCase {
    pub fn new(
        questions: Arc<dyn QuestionSource>,
        gateway: Arc<dyn LlmGateway>,
        store: Arc<dyn TranscriptStore>,
    ) -> Self {
        Self {
            questions,
            gateway,
            store,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for record timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Execute the run with progress callbacks.
    pub async fn execute(
        &self,
        input: RunAskInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<AskOutcome, RunAskError> {
        let provider = self.gateway.provider();
        info!(
            "Asking {} ({}) about {}",
            input.model, provider, input.question_file
        );

        let question = self.questions.load(&input.question_file).await?;

        let messages = PromptTemplate::messages(
            provider.instruction_role(),
            &input.params.instruction,
            &question,
        );
        let request = ChatRequest::new(input.model.clone(), messages, input.params.temperature);

        debug!(
            "Submitting {} messages with temperature {}",
            request.messages.len(),
            request.temperature
        );

        progress.on_request_start(provider, &input.model);
        let started = Instant::now();
        let result = self.gateway.submit(&request).await;
        let elapsed = started.elapsed();
        progress.on_request_complete(result.is_ok(), elapsed);

        match result {
            Ok(response) => {
                let response = response.with_duration(elapsed);
                let record = TranscriptRecord::new(
                    input.model,
                    request.messages,
                    response.clone(),
                    self.clock.now(),
                );
                let transcript = self.store.write_transcript(&record).await?;
                info!(
                    "Answer received in {:.2}s, transcript at {}",
                    elapsed.as_secs_f64(),
                    transcript.display()
                );
                Ok(AskOutcome::Answered {
                    question,
                    response,
                    transcript,
                })
            }
            Err(error) => {
                warn!("Request to {} failed: {}", provider, error);
                let record = ErrorRecord::new(
                    self.clock.now(),
                    input.model,
                    question.filename(),
                    error.to_string(),
                    request.messages,
                );
                let error_file = self.store.write_error(&record).await?;
                Ok(AskOutcome::Failed {
                    question,
                    error,
                    error_file,
                })
            }
        }
    }
}
