use serde::{Deserialize, Serialize};

use super::PreferenceProfile;

/// Whether a question accepts one or several answers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multiple,
}

/// A selectable answer
///
/// Some options are shown as their stored value, others carry a separate
/// display label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QuestionOption {
    LabelOnly { value: String },
    ValueLabel { value: String, label: String },
}

impl QuestionOption {
    pub fn label_only(value: &str) -> Self {
        QuestionOption::LabelOnly {
            value: value.to_string(),
        }
    }

    pub fn value_label(value: &str, label: &str) -> Self {
        QuestionOption::ValueLabel {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    /// The value written into the profile when selected
    pub fn value(&self) -> &str {
        match self {
            QuestionOption::LabelOnly { value } | QuestionOption::ValueLabel { value, .. } => value,
        }
    }

    /// The text shown to the user
    pub fn label(&self) -> &str {
        match self {
            QuestionOption::LabelOnly { value } => value,
            QuestionOption::ValueLabel { label, .. } => label,
        }
    }
}

/// One step of the onboarding questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Profile field the answer is stored under
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub kind: QuestionKind,
    pub options: Vec<QuestionOption>,
}

/// Onboarding state restored from device storage at startup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    /// Set once the questionnaire was either submitted or skipped
    pub completed: bool,
    /// Present only when a submitted profile was found
    pub profile: Option<PreferenceProfile>,
}

impl OnboardingStatus {
    pub fn should_show_questionnaire(&self) -> bool {
        !self.completed
    }
}
