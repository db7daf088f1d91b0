use crate::utils::error::{MotoinatError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INAT_OBSERVATION_BASE: &str = "https://www.inaturalist.org/observations";

/// A Mushroom Observer observation number. Kept as the digit string it was
/// given (leading zeros included) since it is only ever interpolated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoNumber(String);

impl MoNumber {
    /// Trim the token and accept it only if it is a non-empty run of ASCII digits.
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(MotoinatError::InvalidMoNumber {
                token: trimmed.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One record from the iNaturalist observations endpoint. Only the fields the
/// lookup reports are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub id: u64,
    #[serde(default)]
    pub species_guess: Option<String>,
    #[serde(default)]
    pub place_guess: Option<String>,
}

impl Observation {
    pub fn inat_url(&self) -> String {
        format!("{}/{}", INAT_OBSERVATION_BASE, self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationPage {
    pub total_results: u64,
    #[serde(default)]
    pub results: Vec<Observation>,
}

/// Result of querying a single candidate URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptStatus {
    Matched,
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAttempt {
    pub candidate: String,
    pub status: AttemptStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found {
        observation: Observation,
        matched_url: String,
    },
    NotFound,
}

/// Everything the resolver learned about one MO number.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub mo_number: MoNumber,
    pub outcome: LookupOutcome,
    pub attempts: Vec<CandidateAttempt>,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, LookupOutcome::Found { .. })
    }

    pub fn failed_attempts(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| matches!(a.status, AttemptStatus::Failed(_)))
            .count()
    }
}

/// How a lookup is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Detailed,
    UrlOnly,
    NumberOnly,
}

impl OutputMode {
    /// `-q` wins over `--url` when both are given.
    pub fn from_flags(url_only: bool, number_only: bool) -> Self {
        if number_only {
            Self::NumberOnly
        } else if url_only {
            Self::UrlOnly
        } else {
            Self::Detailed
        }
    }
}
