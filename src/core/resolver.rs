use crate::core::candidates::{candidate_urls, DEFAULT_MO_HOST};
use crate::domain::model::{AttemptStatus, CandidateAttempt, Lookup, LookupOutcome, MoNumber};
use crate::domain::ports::ObservationSource;

/// Walks the candidate URLs for an MO number against an observation source and
/// keeps the first one that matches.
pub struct Resolver<S: ObservationSource> {
    source: S,
    mo_host: String,
}

impl<S: ObservationSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self::with_mo_host(source, DEFAULT_MO_HOST)
    }

    pub fn with_mo_host(source: S, mo_host: impl Into<String>) -> Self {
        Self {
            source,
            mo_host: mo_host.into(),
        }
    }

    /// Query each candidate in turn. A failing candidate is logged and skipped;
    /// it never aborts the lookup.
    pub async fn resolve(&self, mo_number: &MoNumber) -> Lookup {
        let mut attempts = Vec::new();

        for candidate in candidate_urls(&self.mo_host, mo_number) {
            tracing::debug!("Trying {} for Mushroom Observer #{}", candidate, mo_number);

            let page = match self.source.observations_by_mo_url(&candidate).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        "Error contacting iNaturalist API for URL {}: {}",
                        candidate,
                        e
                    );
                    attempts.push(CandidateAttempt {
                        candidate,
                        status: AttemptStatus::Failed(e.to_string()),
                    });
                    continue;
                }
            };

            if page.total_results == 0 {
                attempts.push(CandidateAttempt {
                    candidate,
                    status: AttemptStatus::Empty,
                });
                continue;
            }

            match page.results.into_iter().next() {
                Some(observation) => {
                    tracing::debug!(
                        "Mushroom Observer #{} matched iNaturalist observation {} via {}",
                        mo_number,
                        observation.id,
                        candidate
                    );
                    attempts.push(CandidateAttempt {
                        candidate: candidate.clone(),
                        status: AttemptStatus::Matched,
                    });
                    return Lookup {
                        mo_number: mo_number.clone(),
                        outcome: LookupOutcome::Found {
                            observation,
                            matched_url: candidate,
                        },
                        attempts,
                    };
                }
                None => {
                    tracing::warn!(
                        "iNaturalist reported {} result(s) for URL {} but returned none",
                        page.total_results,
                        candidate
                    );
                    attempts.push(CandidateAttempt {
                        candidate,
                        status: AttemptStatus::Empty,
                    });
                }
            }
        }

        tracing::debug!(
            "No match for Mushroom Observer #{} after {} candidates",
            mo_number,
            attempts.len()
        );
        Lookup {
            mo_number: mo_number.clone(),
            outcome: LookupOutcome::NotFound,
            attempts,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::model::{Observation, ObservationPage};
    use crate::utils::error::{MotoinatError, Result};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Replays queued responses and records every URL it was asked about.
    /// Once the queue is drained it answers with an empty page.
    #[derive(Clone, Default)]
    pub(crate) struct ScriptedSource {
        responses: Arc<Mutex<VecDeque<Result<ObservationPage>>>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedSource {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) async fn push(&self, response: Result<ObservationPage>) {
            self.responses.lock().await.push_back(response);
        }

        pub(crate) async fn calls(&self) -> Vec<String> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl ObservationSource for ScriptedSource {
        async fn observations_by_mo_url(&self, mo_url: &str) -> Result<ObservationPage> {
            self.calls.lock().await.push(mo_url.to_string());
            self.responses.lock().await.pop_front().unwrap_or_else(|| {
                Ok(ObservationPage {
                    total_results: 0,
                    results: vec![],
                })
            })
        }
    }

    pub(crate) fn page_with(observation: Observation) -> ObservationPage {
        ObservationPage {
            total_results: 1,
            results: vec![observation],
        }
    }

    fn amanita() -> Observation {
        Observation {
            id: 12345,
            species_guess: Some("Amanita muscaria".to_string()),
            place_guess: Some("California, USA".to_string()),
        }
    }

    fn network_error() -> MotoinatError {
        MotoinatError::IoError(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }

    #[tokio::test]
    async fn test_first_candidate_match_stops_the_walk() {
        let source = ScriptedSource::new();
        source.push(Ok(page_with(amanita()))).await;
        let resolver = Resolver::new(source.clone());

        let lookup = resolver.resolve(&MoNumber::parse("67890").unwrap()).await;

        assert_eq!(
            lookup.outcome,
            LookupOutcome::Found {
                observation: amanita(),
                matched_url: "http://mushroomobserver.org/observer/show_observation/67890"
                    .to_string(),
            }
        );
        assert_eq!(source.calls().await.len(), 1);
        assert_eq!(lookup.attempts.len(), 1);
        assert_eq!(lookup.attempts[0].status, AttemptStatus::Matched);
    }

    #[tokio::test]
    async fn test_no_match_queries_all_six_in_order() {
        let source = ScriptedSource::new();
        let resolver = Resolver::new(source.clone());
        let mo = MoNumber::parse("00000").unwrap();

        let lookup = resolver.resolve(&mo).await;

        assert_eq!(lookup.outcome, LookupOutcome::NotFound);
        assert_eq!(
            source.calls().await,
            candidate_urls(DEFAULT_MO_HOST, &mo)
        );
        assert!(lookup
            .attempts
            .iter()
            .all(|a| a.status == AttemptStatus::Empty));
    }

    #[tokio::test]
    async fn test_later_candidate_match() {
        let source = ScriptedSource::new();
        for _ in 0..3 {
            source
                .push(Ok(ObservationPage {
                    total_results: 0,
                    results: vec![],
                }))
                .await;
        }
        source.push(Ok(page_with(amanita()))).await;
        let resolver = Resolver::new(source.clone());

        let lookup = resolver.resolve(&MoNumber::parse("555").unwrap()).await;

        match lookup.outcome {
            LookupOutcome::Found { matched_url, .. } => {
                assert_eq!(matched_url, "https://mushroomobserver.org/555")
            }
            LookupOutcome::NotFound => panic!("expected a match"),
        }
        assert_eq!(source.calls().await.len(), 4);
    }

    #[tokio::test]
    async fn test_failures_are_skipped_not_fatal() {
        let source = ScriptedSource::new();
        for _ in 0..6 {
            source.push(Err(network_error())).await;
        }
        let resolver = Resolver::new(source.clone());

        let lookup = resolver.resolve(&MoNumber::parse("11111").unwrap()).await;

        assert!(!lookup.is_found());
        assert_eq!(source.calls().await.len(), 6);
        assert_eq!(lookup.failed_attempts(), 6);
    }

    #[tokio::test]
    async fn test_failure_then_match() {
        let source = ScriptedSource::new();
        source.push(Err(network_error())).await;
        source.push(Ok(page_with(amanita()))).await;
        let resolver = Resolver::new(source.clone());

        let lookup = resolver.resolve(&MoNumber::parse("2").unwrap()).await;

        assert!(lookup.is_found());
        assert_eq!(lookup.failed_attempts(), 1);
        assert_eq!(source.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_positive_total_with_empty_results_is_not_a_match() {
        let source = ScriptedSource::new();
        source
            .push(Ok(ObservationPage {
                total_results: 3,
                results: vec![],
            }))
            .await;
        let resolver = Resolver::new(source.clone());

        let lookup = resolver.resolve(&MoNumber::parse("9").unwrap()).await;

        assert!(!lookup.is_found());
        assert_eq!(source.calls().await.len(), 6);
    }

    #[test]
    fn test_custom_host_is_used() {
        let source = ScriptedSource::new();
        let resolver = Resolver::with_mo_host(source.clone(), "mo.test");

        tokio_test::block_on(resolver.resolve(&MoNumber::parse("1").unwrap()));

        let calls = tokio_test::block_on(source.calls());
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], "http://mo.test/observer/show_observation/1");
    }
}
