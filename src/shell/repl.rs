use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    core::tracker::TrackerError,
    question::QuestionDraft,
    runtime::session::{Completed, Session, SessionError},
    types::{self, QuestionId, SolvedDate},
};

use super::{menu::MenuChoice, render};

/// Menu-driven prompt loop. Owns the session; reads answers from `input`
/// and writes everything user-facing to `out`.
pub struct Shell<R, W> {
    session: Session,
    input: R,
    out: W,
    today: fn() -> SolvedDate,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, input: R, out: W) -> Self {
        Self {
            session,
            input,
            out,
            today: types::today,
        }
    }

    /// Replaces the clock used when a solve date is left blank.
    pub fn with_today(mut self, today: fn() -> SolvedDate) -> Self {
        self.today = today;
        self
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Runs until the exit choice or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            render::menu(&mut self.out)?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.out, "Invalid choice. Try again.")?;
                    continue;
                }
            };
            debug!(?choice, "menu choice");
            if choice == MenuChoice::Exit {
                writeln!(self.out, "Exiting... Good luck with your prep!")?;
                break;
            }
            if !self.dispatch(choice)? {
                break;
            }
        }
        self.out.flush()
    }

    /// Returns `false` when input ran out mid-command.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::AddQuestion => self.add_question(),
            MenuChoice::MarkSolved => self.mark_solved(),
            MenuChoice::SearchByTopic => self.search_by_topic(),
            MenuChoice::SolvedByTopic => {
                let counts = self.session.tracker().solved_by_topic();
                render::counts(&mut self.out, "Topic", &counts)?;
                Ok(true)
            }
            MenuChoice::SolvedByDate => {
                let counts = self.session.tracker().solved_by_date();
                render::counts(&mut self.out, "Date", &counts)?;
                Ok(true)
            }
            MenuChoice::Undo => {
                let result = self.session.undo_last_action();
                self.report(result)?;
                Ok(true)
            }
            MenuChoice::SolvedOnDate => self.solved_on_date(),
            MenuChoice::DeleteQuestion => self.delete_question(),
            MenuChoice::Save => {
                match self.session.save() {
                    Ok(event) => render::event(&mut self.out, &event)?,
                    Err(err) => render::error(&mut self.out, &err)?,
                }
                Ok(true)
            }
            MenuChoice::Exit => Ok(false),
        }
    }

    fn add_question(&mut self) -> io::Result<bool> {
        let mut fields = Vec::with_capacity(5);
        for label in [
            "Enter title: ",
            "Enter topic: ",
            "Enter difficulty (Easy/Medium/Hard): ",
            "Enter notes: ",
            "Enter platform (LeetCode, GFG, etc.): ",
        ] {
            let Some(value) = self.prompt(label)? else {
                return Ok(false);
            };
            fields.push(value);
        }
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        let draft = QuestionDraft {
            title: next(),
            topic: next(),
            difficulty: next(),
            notes: next(),
            platform: next(),
        };
        let completed = self.session.add_question(draft);
        self.report(Ok(completed))?;
        Ok(true)
    }

    fn mark_solved(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_id("Enter question ID to mark as solved: ")? else {
            return Ok(false);
        };
        let Some(id) = id else {
            return Ok(true);
        };
        match self.session.tracker().get(id) {
            None => {
                writeln!(self.out, "Invalid Question ID.")?;
                return Ok(true);
            }
            Some(q) if q.is_solved => {
                writeln!(self.out, "Already marked as solved.")?;
                return Ok(true);
            }
            Some(_) => {}
        }
        let Some(date) = self.prompt("Enter date of solving (dd/mm/yyyy) or leave blank for today: ")? else {
            return Ok(false);
        };
        let date = if date.trim().is_empty() { (self.today)() } else { date };
        let result = self.session.mark_solved(id, date);
        self.report(result)?;
        Ok(true)
    }

    fn search_by_topic(&mut self) -> io::Result<bool> {
        let Some(topic) = self.prompt("Enter topic to search: ")? else {
            return Ok(false);
        };
        match self.session.tracker().search_by_topic(&topic) {
            Ok(found) => render::topic_results(&mut self.out, &topic, &found)?,
            Err(TrackerError::NoMatch { .. }) => writeln!(self.out, "No questions found for this topic.")?,
            Err(err) => writeln!(self.out, "Error: {err}")?,
        }
        Ok(true)
    }

    fn solved_on_date(&mut self) -> io::Result<bool> {
        let Some(date) = self.prompt("Enter date (dd/mm/yyyy): ")? else {
            return Ok(false);
        };
        match self.session.tracker().solved_on(&date) {
            Ok(found) => render::solved_on(&mut self.out, &date, &found)?,
            Err(TrackerError::NoMatch { .. }) => {
                writeln!(self.out, "No questions were marked as solved on this date.")?
            }
            Err(err) => writeln!(self.out, "Error: {err}")?,
        }
        Ok(true)
    }

    fn delete_question(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_id("Enter the Question ID to delete: ")? else {
            return Ok(false);
        };
        let Some(id) = id else {
            return Ok(true);
        };
        let result = self.session.delete_question(id);
        if matches!(result, Err(SessionError::Tracker(TrackerError::NotFound(_)))) {
            writeln!(self.out, "No such question found.")?;
            return Ok(true);
        }
        self.report(result)?;
        Ok(true)
    }

    fn report(&mut self, result: Result<Completed, SessionError>) -> io::Result<()> {
        match result {
            Ok(completed) => {
                render::event(&mut self.out, &completed.event)?;
                if let Some(err) = completed.persist_error {
                    writeln!(self.out, "Warning: could not save data: {err}")?;
                }
                Ok(())
            }
            Err(err) => render::error(&mut self.out, &err),
        }
    }

    /// Outer `None` means end of input; inner `None` means the answer was not
    /// a valid id and has already been reported.
    fn prompt_id(&mut self, label: &str) -> io::Result<Option<Option<QuestionId>>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.trim().parse::<QuestionId>() {
            Ok(id) => Ok(Some(Some(id))),
            Err(_) => {
                writeln!(self.out, "Invalid Question ID.")?;
                Ok(Some(None))
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
