//! Output formatting utilities

use crate::application::PurgeSummary;
use crate::domain::{JournalEntry, MoodEntry, MoodStats, Session};
use std::collections::BTreeMap;

const PREVIEW_CHARS: usize = 80;

/// Format sessions, one line each
pub fn format_sessions(sessions: &[Session]) -> String {
    if sessions.is_empty() {
        return "No sessions found".to_string();
    }

    let mut output = String::new();
    for session in sessions {
        output.push_str(&format!(
            "{}  {}  {} message(s)\n",
            session.created_at,
            session.id,
            session.messages.len()
        ));
    }
    output
}

/// Format one session with its full transcript
pub fn format_session_detail(session: &Session) -> String {
    let mut output = format!("{}  {}\n", session.id, session.created_at);
    for message in &session.messages {
        let emotion = message
            .emotion
            .as_deref()
            .map(|e| format!(" ({})", e))
            .unwrap_or_default();
        output.push_str(&format!(
            "[{}] {}{}: {}\n",
            message.timestamp.format("%H:%M"),
            message.role,
            emotion,
            message.content
        ));
    }
    output
}

/// Format mood entries, oldest first
pub fn format_mood_history(entries: &[&MoodEntry]) -> String {
    if entries.is_empty() {
        return "No mood entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {:<10} energy {:>2}  anxiety {:>2}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.mood,
            entry.energy.value(),
            entry.anxiety.value()
        ));
        if !entry.triggers.is_empty() {
            let triggers: Vec<&str> = entry.triggers.iter().map(String::as_str).collect();
            output.push_str(&format!("  [{}]", triggers.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// Format weekly stats plus trigger frequencies
pub fn format_mood_stats(stats: &MoodStats, triggers: &BTreeMap<String, usize>) -> String {
    if stats.total_entries == 0 {
        return "No mood entries yet".to_string();
    }

    let mut output = format!(
        "Total entries: {}\nLast 7 days: {}\n",
        stats.total_entries, stats.recent_entries
    );
    if stats.recent_entries > 0 {
        output.push_str(&format!(
            "Average energy: {:.1}\nAverage anxiety: {:.1}\n",
            stats.avg_energy, stats.avg_anxiety
        ));
    }

    let mut ranked: Vec<(&String, &usize)> = triggers.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    if !ranked.is_empty() {
        output.push_str("Common triggers:\n");
        for (trigger, count) in ranked.into_iter().take(5) {
            output.push_str(&format!("  {} ({})\n", trigger, count));
        }
    }
    output
}

/// Format journal entries as previews
pub fn format_journal_list(entries: &[&JournalEntry]) -> String {
    if entries.is_empty() {
        return "No journal entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "#{:<4} {}  {}\n",
            entry.id,
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.preview(PREVIEW_CHARS).replace('\n', " ")
        ));
    }
    output
}

/// Format one journal entry in full
pub fn format_journal_entry(entry: &JournalEntry) -> String {
    format!(
        "#{}  {}  ({} words)\n\n{}\n",
        entry.id,
        entry.timestamp.format("%Y-%m-%d %H:%M"),
        entry.word_count,
        entry.content
    )
}

pub fn format_purge_summary(summary: &PurgeSummary) -> String {
    let mut output = format!(
        "Removed {} session(s) and {} mood entr(ies)\n",
        summary.sessions.removed_count(),
        summary.mood_removed
    );
    for skipped in &summary.sessions.skipped {
        output.push_str(&format!("Skipped {}: {}\n", skipped.id, skipped.reason));
    }
    output
}
