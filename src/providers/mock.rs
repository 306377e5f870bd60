/*!
 * Mock backend implementations for testing.
 *
 * This module provides scripted backends that simulate endpoint behaviors:
 * - `working()` - always succeeds with deterministic output
 * - `failing()` - always fails with a provider error
 * - `empty()` - succeeds but produces nothing
 * - `intermittent(n)` - fails every nth request
 *
 * Both mocks record the requests they receive so tests can assert on the
 * exact parameters the service layer sends.
 */

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{
    GenerationDefaults, SummarizationBackend, SummaryRequest, TranslationBackend,
    TranslationPayload, TranslationRequest,
};

/// Behavior mode for the mock backends
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with deterministic output
    Working,
    /// Always fails with a provider error
    Failing,
    /// Succeeds but produces no output
    Empty,
    /// Fails every nth request
    Intermittent { fail_every: usize },
}

/// Mock summarization backend
#[derive(Debug)]
pub struct MockSummarizer {
    /// Behavior mode
    behavior: MockBehavior,
    /// Generation defaults reported to the service layer
    defaults: GenerationDefaults,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Requests received, in order
    requests: Arc<Mutex<Vec<SummaryRequest>>>,
}

impl MockSummarizer {
    /// Create a mock with the given behavior and model defaults
    pub fn new(behavior: MockBehavior, defaults: GenerationDefaults) -> Self {
        Self {
            behavior,
            defaults,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock with the stock model defaults
    pub fn working() -> Self {
        Self::new(
            MockBehavior::Working,
            GenerationDefaults {
                max_length: 142,
                min_length: 56,
            },
        )
    }

    /// Create a failing mock
    pub fn failing() -> Self {
        Self::new(
            MockBehavior::Failing,
            GenerationDefaults {
                max_length: 142,
                min_length: 56,
            },
        )
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the requests received so far
    pub fn requests(&self) -> Vec<SummaryRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SummarizationBackend for MockSummarizer {
    fn generation_defaults(&self) -> GenerationDefaults {
        self.defaults
    }

    async fn summarize(&self, request: SummaryRequest) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        let text = request.text.clone();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        match self.behavior {
            MockBehavior::Working => Ok(format!("Summary: {}", text)),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "Mock summarizer intentionally failing".to_string(),
            )),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == 0 {
                    Err(ProviderError::RequestFailed(format!(
                        "Mock summarizer failing on request {}",
                        count
                    )))
                } else {
                    Ok(format!("Summary: {}", text))
                }
            }
        }
    }
}

/// Mock translation backend
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Requests received, in order
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
}

impl MockTranslator {
    /// Create a mock with the given behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns no payloads
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create an intermittently failing mock
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the requests received so far
    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TranslationBackend for MockTranslator {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Vec<TranslationPayload>, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        let text = request.text.clone();
        let target = request.target_script.clone();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let translated = |text: &str, target: &str| {
            vec![TranslationPayload {
                translation_text: format!("[{}] {}", target, text),
            }]
        };

        match self.behavior {
            MockBehavior::Working => Ok(translated(&text, &target)),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "Mock translator intentionally failing".to_string(),
            )),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == 0 {
                    Err(ProviderError::RequestFailed(format!(
                        "Mock translator failing on request {}",
                        count
                    )))
                } else {
                    Ok(translated(&text, &target))
                }
            }
        }
    }
}
