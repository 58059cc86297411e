//! Password evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::analysis::{Analysis, Check, Strength};
use crate::common_words::CommonWords;
use crate::sections::{Candidate, CHECKS, CHECK_POINTS, MODIFIERS};

/// Quiet period before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates passwords against a common-word list.
///
/// Holds no state besides the list; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    common_words: CommonWords,
}

impl Evaluator {
    pub fn new(common_words: CommonWords) -> Self {
        Self { common_words }
    }

    pub fn common_words(&self) -> &CommonWords {
        &self.common_words
    }

    /// Scores `password` and collects check results and suggestions.
    ///
    /// Every check and modifier runs, in table order. Never fails.
    pub fn evaluate(&self, password: &str) -> Analysis {
        let candidate = Candidate::new(password, &self.common_words);
        let mut score: i64 = 0;
        let mut checks = Vec::with_capacity(CHECKS.len());
        let mut suggestions = Vec::new();

        for rule in &CHECKS {
            let passed = (rule.test)(&candidate);

            #[cfg(feature = "tracing")]
            tracing::trace!("check {} passed={}", rule.name, passed);

            if passed {
                score += CHECK_POINTS;
            } else {
                suggestions.push(rule.suggestion.to_string());
            }
            let message = if passed { rule.passed_message } else { rule.failed_message };
            checks.push(Check {
                passed,
                message: message.to_string(),
            });
        }

        for (_name, modifier) in &MODIFIERS {
            let adjustment = modifier(&candidate);
            score += adjustment.delta;

            #[cfg(feature = "tracing")]
            tracing::trace!("modifier {} adjusted score by {}", _name, adjustment.delta);

            if let Some(suggestion) = adjustment.suggestion {
                suggestions.push(suggestion.to_string());
            }
        }

        let strength = Strength::from_score(score);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "password evaluated: score={} strength={} failed_checks={}",
            score,
            strength,
            checks.iter().filter(|c| !c.passed).count()
        );

        Analysis {
            strength,
            score,
            checks,
            suggestions,
        }
    }

    /// Same as [`Evaluator::evaluate`] for a password held in a `SecretString`.
    pub fn evaluate_secret(&self, password: &SecretString) -> Analysis {
        self.evaluate(password.expose_secret())
    }
}

/// Evaluates a password with the built-in common-word list.
pub fn evaluate(password: &str) -> Analysis {
    Evaluator::default().evaluate(password)
}

/// Evaluates a secret password with the built-in common-word list.
pub fn evaluate_secret(password: &SecretString) -> Analysis {
    Evaluator::default().evaluate_secret(password)
}

/// Waits for [`DEBOUNCE`], then evaluates with the built-in common-word list
/// and sends the result.
///
/// Returns without sending if `token` is cancelled first, which is how a
/// newer keystroke supersedes a pending evaluation.
#[cfg(feature = "async")]
pub async fn evaluate_debounced(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Analysis>,
) {
    Evaluator::default()
        .evaluate_debounced(password, token, tx)
        .await
}

#[cfg(feature = "async")]
impl Evaluator {
    /// Debounced form of [`Evaluator::evaluate_secret`]; see [`evaluate_debounced`].
    pub async fn evaluate_debounced(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Analysis>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation is about to start...");

        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("evaluation superseded before debounce elapsed");
                return;
            }
            _ = tokio::time::sleep(DEBOUNCE) => {}
        }

        let analysis = self.evaluate_secret(password);

        if let Err(_e) = tx.send(analysis).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password analysis: {}", _e);
        }
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_debounced_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("Tr7#mK9$qLpZ".to_string().into());
        evaluate_debounced(&pwd, token, tx).await;

        let analysis = rx.recv().await.expect("Should receive analysis");
        assert_eq!(analysis.strength, Strength::VeryStrong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_debounced_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("Tr7#mK9$qLpZ".to_string().into());
        evaluate_debounced(&pwd, token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_debounced_superseded_by_newer_keystroke() {
        let (tx, mut rx) = mpsc::channel(2);
        let first = CancellationToken::new();
        let second = CancellationToken::new();
        let evaluator = Evaluator::default();
        let evaluator = &evaluator;

        let stale = SecretString::new("pass".to_string().into());
        let fresh = SecretString::new("Password123!".to_string().into());

        let canceller = first.clone();
        let stale_run = evaluator.evaluate_debounced(&stale, first, tx.clone());
        let fresh_run = async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
            evaluator.evaluate_debounced(&fresh, second, tx).await;
        };
        tokio::join!(stale_run, fresh_run);

        let analysis = rx.recv().await.expect("Should receive analysis");
        assert_eq!(analysis.score, 80);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_debounced_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let pwd = SecretString::new("whatever".to_string().into());

        // must not panic
        evaluate_debounced(&pwd, CancellationToken::new(), tx).await;
    }
}
