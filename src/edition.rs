use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

pub const JOB_ROLES: [&str; 4] = ["SDE", "Data Engineer", "ML Engineer", "Backend"];

/// Which of the two demo pages is being served. They share the classifier
/// and differ in wording and in how an empty concept list is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edition {
    #[default]
    Preview,
    Dashboard,
}

const PREVIEW_FLOW: [&str; 3] = [
    "Take the required inputs from the user or predefined values.",
    "Perform the main computations step by step (loops, conditions, or function calls).",
    "Produce the final output that answers the lab question.",
];

const DASHBOARD_FLOW: [&str; 3] = [
    "Read inputs or initial values that define the problem.",
    "Use loops, conditions, and function calls to transform the data.",
    "Produce the final result and display it to the user.",
];

const PREVIEW_VARIABLES: [&str; 2] = [
    "Track how each variable changes inside loops and conditions.",
    "Note which variables are inputs, which are counters/indexes, and which store final results.",
];

const DASHBOARD_VARIABLES: [&str; 2] = [
    "Track counters and indexes inside loops carefully.",
    "Separate input variables, working variables, and result variables.",
];

// Indexed like JOB_ROLES, last entry is the fallback.
const PREVIEW_JOB_FOCUS: [&str; 5] = [
    "For SDE roles, focus on arrays, strings, recursion, and dynamic programming. \
     This lab builds your problem\u{2011}solving foundation.",
    "For Data Engineer roles, focus on clean input/output handling, \
     file processing, and basic algorithms that scale to large data.",
    "For ML Engineer roles, pay attention to how you structure data \
     and write reusable functions. These habits carry into model code.",
    "For Backend roles, focus on robustness, error handling, and \
     modular code. These are the same skills used in APIs and services.",
    "Pick a role to see focused guidance on how this lab connects to careers.",
];

const DASHBOARD_JOB_FOCUS: [&str; 5] = [
    "For SDE roles, focus on arrays, strings, recursion, and dynamic programming. \
     This lab builds your problem\u{2011}solving foundation.",
    "For Data Engineer roles, pay attention to clean input/output, \
     loops over large data, and how you structure records.",
    "For ML Engineer roles, practice turning raw input into \
     clean numeric features, and write reusable helper functions.",
    "For Backend roles, think about edge cases, robustness, and \
     how this logic would sit behind an API endpoint.",
    "Pick a role to see focused guidance on how this lab connects \
     to careers and interview patterns.",
];

pub const DASHBOARD_COURSE_FALLBACK: &str =
    "You will revisit these basics in later subjects like DSA and OS.";

impl Edition {
    pub fn name(self) -> &'static str {
        match self {
            Edition::Preview => "preview",
            Edition::Dashboard => "dashboard",
        }
    }

    /// Directory under the frontend root holding this edition's `index.html`.
    pub fn frontend_dir(self) -> &'static str {
        self.name()
    }

    pub fn flow(self) -> &'static [&'static str] {
        match self {
            Edition::Preview => &PREVIEW_FLOW,
            Edition::Dashboard => &DASHBOARD_FLOW,
        }
    }

    pub fn variables(self) -> &'static [&'static str] {
        match self {
            Edition::Preview => &PREVIEW_VARIABLES,
            Edition::Dashboard => &DASHBOARD_VARIABLES,
        }
    }

    /// Exact, case-sensitive match on the role; anything else gets the
    /// "pick a role" paragraph.
    pub fn job_focus(self, job_role: &str) -> &'static str {
        let table = match self {
            Edition::Preview => &PREVIEW_JOB_FOCUS,
            Edition::Dashboard => &DASHBOARD_JOB_FOCUS,
        };
        let idx = JOB_ROLES
            .iter()
            .position(|role| *role == job_role)
            .unwrap_or(JOB_ROLES.len());
        table[idx]
    }
}

impl FromStr for Edition {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preview" => Ok(Edition::Preview),
            "dashboard" => Ok(Edition::Dashboard),
            other => Err(ApiError::Config(format!(
                "unknown edition '{other}', expected 'preview' or 'dashboard'"
            ))),
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edition_names() {
        assert_eq!("preview".parse::<Edition>().unwrap(), Edition::Preview);
        assert_eq!(" Dashboard ".parse::<Edition>().unwrap(), Edition::Dashboard);
        assert!("classic".parse::<Edition>().is_err());
    }

    #[test]
    fn job_focus_is_exact_match() {
        let sde = Edition::Preview.job_focus("SDE");
        assert!(sde.starts_with("For SDE roles"));
        assert!(sde.contains("problem\u{2011}solving"));

        let fallback = Edition::Preview.job_focus("");
        assert_eq!(Edition::Preview.job_focus("sde"), fallback);
        assert_eq!(Edition::Preview.job_focus("Backend Developer"), fallback);
        assert!(fallback.starts_with("Pick a role"));
    }

    #[test]
    fn preview_paragraphs_exact() {
        assert_eq!(
            Edition::Preview.job_focus("Data Engineer"),
            "For Data Engineer roles, focus on clean input/output handling, file processing, \
             and basic algorithms that scale to large data."
        );
        assert_eq!(
            Edition::Preview.job_focus("ML Engineer"),
            "For ML Engineer roles, pay attention to how you structure data and write reusable \
             functions. These habits carry into model code."
        );
        assert_eq!(
            Edition::Preview.job_focus("Backend"),
            "For Backend roles, focus on robustness, error handling, and modular code. \
             These are the same skills used in APIs and services."
        );
        assert_eq!(
            Edition::Preview.job_focus("Unknown Role"),
            "Pick a role to see focused guidance on how this lab connects to careers."
        );
    }

    #[test]
    fn dashboard_paragraphs_exact() {
        assert_eq!(
            Edition::Dashboard.job_focus("SDE"),
            "For SDE roles, focus on arrays, strings, recursion, and dynamic programming. \
             This lab builds your problem\u{2011}solving foundation."
        );
        assert_eq!(
            Edition::Dashboard.job_focus("Data Engineer"),
            "For Data Engineer roles, pay attention to clean input/output, loops over large data, \
             and how you structure records."
        );
        assert_eq!(
            Edition::Dashboard.job_focus("ML Engineer"),
            "For ML Engineer roles, practice turning raw input into clean numeric features, \
             and write reusable helper functions."
        );
        assert_eq!(
            Edition::Dashboard.job_focus("Backend"),
            "For Backend roles, think about edge cases, robustness, and how this logic would \
             sit behind an API endpoint."
        );
        assert_eq!(
            Edition::Dashboard.job_focus(""),
            "Pick a role to see focused guidance on how this lab connects to careers and \
             interview patterns."
        );
    }

    #[test]
    fn every_role_has_a_distinct_paragraph() {
        for edition in [Edition::Preview, Edition::Dashboard] {
            let mut seen: Vec<&str> = JOB_ROLES.iter().map(|r| edition.job_focus(r)).collect();
            seen.push(edition.job_focus("Unknown Role"));
            let count = seen.len();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), count, "{edition} repeats a paragraph");
        }
    }

    #[test]
    fn editions_word_the_backend_role_differently() {
        assert_ne!(
            Edition::Preview.job_focus("Backend"),
            Edition::Dashboard.job_focus("Backend")
        );
        assert_eq!(Edition::Preview.flow().len(), 3);
        assert_eq!(Edition::Dashboard.variables().len(), 2);
    }
}
