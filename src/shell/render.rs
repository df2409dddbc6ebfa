use std::io::{self, Write};

use crate::{
    core::tracker::TrackerError,
    op::Action,
    question::Question,
    runtime::{events::TrackerEvent, session::SessionError},
};

use super::menu::MenuChoice;

pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " -INTERVIEW PREP TRACKER- ")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    write!(out, "Enter your choice: ")?;
    out.flush()
}

pub fn event<W: Write>(out: &mut W, event: &TrackerEvent) -> io::Result<()> {
    match event {
        TrackerEvent::Added { id } => writeln!(out, "Question added with ID: {id}"),
        TrackerEvent::Solved { .. } => writeln!(out, "Marked as solved."),
        TrackerEvent::Deleted { .. } => writeln!(out, "Question deleted successfully."),
        TrackerEvent::Undone { action } => match action {
            Action::Add { .. } => writeln!(out, "Undid last added question."),
            Action::Solve { .. } => writeln!(out, "Undid last mark as solved."),
            Action::Delete { .. } => writeln!(out, "Undid question deletion."),
        },
        TrackerEvent::Saved { rows } => writeln!(out, "Data saved successfully ({rows} questions)."),
    }
}

pub fn error<W: Write>(out: &mut W, err: &SessionError) -> io::Result<()> {
    match err {
        SessionError::Tracker(TrackerError::NotFound(_)) => writeln!(out, "Invalid Question ID."),
        SessionError::Tracker(TrackerError::AlreadySolved(_)) => {
            writeln!(out, "Already marked as solved.")
        }
        SessionError::Tracker(TrackerError::NothingToUndo) => writeln!(out, "Nothing to undo."),
        other => writeln!(out, "Error: {other}"),
    }
}

pub fn topic_results<W: Write>(out: &mut W, topic: &str, found: &[&Question]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " Questions under topic [{topic}]:")?;
    for q in found {
        writeln!(
            out,
            "ID: {} | Title: {} | Difficulty: {} | Platform: {} | Solved: {}",
            q.id,
            q.title,
            q.difficulty,
            q.platform,
            q.solved_label()
        )?;
    }
    Ok(())
}

pub fn counts<W: Write>(out: &mut W, heading: &str, counts: &[(String, u32)]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " Solved Questions by {heading}:")?;
    if counts.is_empty() {
        writeln!(out, "No solved questions yet.")?;
    }
    for (key, count) in counts {
        writeln!(out, "{key}: {count} solved")?;
    }
    Ok(())
}

pub fn solved_on<W: Write>(out: &mut W, date: &str, found: &[&Question]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " Questions solved on {date}:")?;
    for q in found {
        writeln!(
            out,
            "ID: {} | Title: {} | Topic: {} | Difficulty: {} | Platform: {} | Notes: {}",
            q.id, q.title, q.topic, q.difficulty, q.platform, q.notes
        )?;
    }
    writeln!(out)?;
    writeln!(out, " Total solved on this date: {}", found.len())
}
