//! Keyword heuristics that turn a pasted lab program into an [`Explanation`].
//!
//! Detection is plain case-sensitive substring search; there is no parsing.
//! Everything here is pure and safe to call from any number of tasks.

use crate::edition::{Edition, DASHBOARD_COURSE_FALLBACK};
use crate::titlecase::title_case;
use crate::{ExplainRequest, Explanation, PracticeTopic};

pub const LOOPS: &str = "loops";
pub const ARRAYS: &str = "arrays";
pub const FUNCTIONS: &str = "functions";
pub const CONDITIONS: &str = "conditions";

const LOOP_KEYWORDS: [&str; 4] = ["for ", "while ", "for(", "while("];
const CONDITION_KEYWORDS: [&str; 2] = ["if ", "if("];
const ARRAY_KEYWORDS: [&str; 3] = ["[", "Array", "array"];
const FUNCTION_KEYWORDS: [&str; 3] = ["func", "def ", "void "];

const PRACTICE_PLATFORM: &str = "LeetCode / HackerRank";
const FALLBACK_TOPIC: &str = "basics";
const FALLBACK_CONCEPTS: &str = "basic syntax";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detected {
    pub loops: bool,
    pub arrays: bool,
    pub functions: bool,
    pub conditions: bool,
}

fn contains_any(code: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| code.contains(kw))
}

pub fn detect(code: &str) -> Detected {
    Detected {
        loops: contains_any(code, &LOOP_KEYWORDS),
        arrays: contains_any(code, &ARRAY_KEYWORDS),
        functions: contains_any(code, &FUNCTION_KEYWORDS),
        conditions: contains_any(code, &CONDITION_KEYWORDS),
    }
}

// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lines in the trimmed text. Blank input still counts as one line.
pub fn count_lines(code: &str) -> usize {
    code.trim_matches(is_strippable).split('\n').count()
}

/// Concepts in fixed order: loops, arrays, functions, conditions. When none
/// were detected a non-empty hint is used verbatim.
pub fn concepts(code: &str, hint: &str) -> Vec<String> {
    let found = detect(code);
    let mut out: Vec<String> = [
        (found.loops, LOOPS),
        (found.arrays, ARRAYS),
        (found.functions, FUNCTIONS),
        (found.conditions, CONDITIONS),
    ]
    .into_iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, name)| name.to_string())
    .collect();

    if out.is_empty() && !hint.is_empty() {
        out.push(hint.to_string());
    }
    out
}

pub fn future_courses(concepts: &[String]) -> Vec<String> {
    let has = |name: &str| concepts.iter().any(|c| c == name);
    let mut courses = Vec::new();
    if has(ARRAYS) || has(LOOPS) {
        courses.push("Data Structures".to_string());
        courses.push("Algorithms".to_string());
    }
    if has(FUNCTIONS) {
        courses.push("Operating Systems".to_string());
    }
    if has(CONDITIONS) {
        courses.push("DBMS (query conditions)".to_string());
    }
    courses
}

fn templated_topic(concept: &str) -> PracticeTopic {
    let title = title_case(concept);
    PracticeTopic {
        topic: concept.to_string(),
        platform: PRACTICE_PLATFORM.to_string(),
        sets: vec![
            format!("{title} basics (easy)"),
            format!("{title} patterns (medium)"),
            format!("{title} interview mix (medium/hard)"),
        ],
    }
}

pub fn practice_topics(concepts: &[String], edition: Edition) -> Vec<PracticeTopic> {
    if !concepts.is_empty() {
        return concepts.iter().map(|c| templated_topic(c)).collect();
    }
    match edition {
        Edition::Preview => vec![PracticeTopic {
            topic: FALLBACK_TOPIC.to_string(),
            platform: "HackerRank".to_string(),
            sets: vec!["Intro problems (easy)".to_string()],
        }],
        Edition::Dashboard => vec![templated_topic(FALLBACK_TOPIC)],
    }
}

pub fn summary(language: &str, num_lines: usize, concepts: &[String]) -> String {
    let ideas = if concepts.is_empty() {
        FALLBACK_CONCEPTS.to_string()
    } else {
        concepts.join(", ")
    };
    format!(
        "This {language} program has about {num_lines} line(s) and uses the core idea(s): {ideas}."
    )
}

/// What the heuristics found in one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub num_lines: usize,
    pub concepts: Vec<String>,
}

pub fn analyze(code: &str, hint: &str) -> Analysis {
    Analysis {
        num_lines: count_lines(code),
        concepts: concepts(code, hint),
    }
}

/// Turns an analysis into the explanation for the given edition.
pub fn render(request: &ExplainRequest, analysis: &Analysis, edition: Edition) -> Explanation {
    let concepts = &analysis.concepts;

    let mut courses = future_courses(concepts);
    if courses.is_empty() && edition == Edition::Dashboard {
        courses.push(DASHBOARD_COURSE_FALLBACK.to_string());
    }

    Explanation {
        summary: summary(request.language(), analysis.num_lines, concepts),
        flow: edition.flow().iter().map(|s| s.to_string()).collect(),
        variables: edition.variables().iter().map(|s| s.to_string()).collect(),
        future_courses: courses,
        practice_topics: practice_topics(concepts, edition),
        job_focus: edition.job_focus(request.job_role()).to_string(),
    }
}

/// Builds the full explanation for an already-defaulted request.
pub fn explain_code(request: &ExplainRequest, edition: Edition) -> Explanation {
    let analysis = analyze(request.code(), request.concept());
    render(request, &analysis, edition)
}

/// Preview-edition explanation from the four raw fields.
pub fn classify(code: &str, language: &str, concept: &str, job_role: &str) -> Explanation {
    let request = ExplainRequest {
        code: Some(code.to_string()),
        language: Some(language.to_string()),
        concept: Some(concept.to_string()),
        job_role: Some(job_role.to_string()),
    };
    explain_code(&request, Edition::Preview)
}
