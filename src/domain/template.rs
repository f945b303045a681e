//! Prompt templates for the response generator and journal prompts

use crate::domain::TherapyApproach;
use crate::error::{MindcareError, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

// Built-in template constants
const THERAPY_TEMPLATE: &str = "You are a compassionate, multilingual mental health therapist specializing in {therapy_style}. \
Your goal is to help users cope with issues such as anxiety, depression, ADHD, stress, and other mental health challenges. \
Use evidence-based techniques and maintain a calm, supportive tone in your responses. \
If the user is in crisis, recommend contacting a local mental health professional or emergency hotline. \
Please respond entirely in {language}. \
User says: \"{user_input}\"";

const PLACEHOLDERS: [&str; 3] = ["therapy_style", "language", "user_input"];

const JOURNAL_PROMPTS: [&str; 7] = [
    "What is one thing that went better than you expected today?",
    "Describe a moment this week when you felt calm. What made it possible?",
    "What is weighing on you right now, and what part of it is in your control?",
    "Write about someone who made you feel supported recently.",
    "What would you like to let go of before tomorrow?",
    "Which feeling showed up most often today? Where did you notice it in your body?",
    "List three small things you are grateful for and why they matter.",
];

/// Language tags with a friendly name for prompts
const LANGUAGE_NAMES: [(&str, &str); 1] = [("en-US", "English (US)")];

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z_]+)\}").unwrap())
}

/// Template for the prompt sent to the response generator
#[derive(Debug)]
pub struct PromptTemplate {
    content: String,
}

impl PromptTemplate {
    pub fn builtin() -> Self {
        PromptTemplate {
            content: THERAPY_TEMPLATE.to_string(),
        }
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| MindcareError::Template(format!("Failed to read template file: {}", e)))?;

        Self::from_content(content)
    }

    /// Create template from text, rejecting placeholders it can't fill
    pub fn from_content(content: String) -> Result<Self> {
        let unknown: Vec<&str> = placeholder_regex()
            .captures_iter(&content)
            .filter_map(|captures| captures.get(1))
            .map(|name| name.as_str())
            .filter(|name| !PLACEHOLDERS.contains(name))
            .collect();

        if !unknown.is_empty() {
            return Err(MindcareError::Template(format!(
                "Unknown placeholder(s): {}. Available: {}",
                unknown.join(", "),
                PLACEHOLDERS.join(", ")
            )));
        }

        Ok(PromptTemplate { content })
    }

    /// Render template for one user turn
    pub fn render(&self, approach: TherapyApproach, language: &str, user_input: &str) -> String {
        // User text goes last so braces typed by the user are never expanded
        self.content
            .replace("{therapy_style}", approach.display_name())
            .replace("{language}", language_name(language))
            .replace("{user_input}", user_input)
    }
}

/// Friendly name for a language tag, or the tag itself when unknown
pub fn language_name(tag: &str) -> &str {
    LANGUAGE_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(tag))
        .map(|(_, name)| *name)
        .unwrap_or(tag)
}

/// Load the custom prompt template or fall back to built-in
pub fn load_template(workspace_root: &Path) -> Result<PromptTemplate> {
    let custom_path = workspace_root
        .join(".mindcare")
        .join("templates")
        .join("therapy.txt");

    if custom_path.exists() {
        PromptTemplate::from_file(&custom_path)
    } else {
        Ok(PromptTemplate::builtin())
    }
}

/// Writing prompt for a given day; rotates through the built-in list
pub fn journal_prompt_for(date: NaiveDate) -> &'static str {
    JOURNAL_PROMPTS[date.ordinal0() as usize % JOURNAL_PROMPTS.len()]
}
