//! Run configuration: who the analysis is for and what they are doing.
//!
//! Accepts the loose shapes seen in the wild — persona and job as plain
//! strings or as objects carrying `role`/`task` fields — and resolves
//! anything absent or malformed to documented defaults. Parsing never
//! fails.

use serde::{Deserialize, Serialize};

use crate::model::{JobSpec, PersonaProfile};

/// Default persona role when the configuration supplies none.
pub const DEFAULT_PERSONA: &str = "Food Contractor";

/// Default job description when the configuration supplies none.
pub const DEFAULT_JOB: &str = "Analyze document";

/// Persona field: either a bare role string or `{ "role": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonaDescriptor {
    /// `"persona": "Student"`
    Role(String),
    /// `"persona": { "role": "Student" }`
    Structured {
        /// Role name
        role: String,
    },
}

impl PersonaDescriptor {
    /// The role name carried by this descriptor.
    pub fn role(&self) -> &str {
        match self {
            Self::Role(role) => role,
            Self::Structured { role } => role,
        }
    }
}

/// Job field: either a bare task string or `{ "task": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobDescriptor {
    /// `"job_to_be_done": "Plan a menu"`
    Task(String),
    /// `"job_to_be_done": { "task": "Plan a menu" }`
    Structured {
        /// Task description
        task: String,
    },
}

impl JobDescriptor {
    /// The task description carried by this descriptor.
    pub fn task(&self) -> &str {
        match self {
            Self::Task(task) => task,
            Self::Structured { task } => task,
        }
    }
}

/// Persona and job configuration for a pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Persona descriptor (defaults to "Food Contractor" when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<PersonaDescriptor>,

    /// Job descriptor (defaults to "Analyze document" when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_to_be_done: Option<JobDescriptor>,
}

impl RunConfig {
    /// Config with explicit persona and job strings.
    pub fn new(persona: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            persona: Some(PersonaDescriptor::Role(persona.into())),
            job_to_be_done: Some(JobDescriptor::Task(job.into())),
        }
    }

    /// Parse a JSON configuration document.
    ///
    /// Malformed JSON or unexpected field shapes fall back to the default
    /// config; this never returns an error.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("malformed run config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Resolve to a concrete persona profile and job spec, applying
    /// defaults for anything missing.
    pub fn resolve(&self) -> (PersonaProfile, JobSpec) {
        let role = self
            .persona
            .as_ref()
            .map(|p| p.role())
            .unwrap_or(DEFAULT_PERSONA);
        let task = self
            .job_to_be_done
            .as_ref()
            .map(|j| j.task())
            .unwrap_or(DEFAULT_JOB);
        (PersonaProfile::named(role), JobSpec::new(task))
    }
}
