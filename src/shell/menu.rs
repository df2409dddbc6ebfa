use std::str::FromStr;

/// Numbered menu entries, 1 through 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddQuestion,
    MarkSolved,
    SearchByTopic,
    SolvedByTopic,
    SolvedByDate,
    Undo,
    SolvedOnDate,
    DeleteQuestion,
    Save,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AddQuestion,
        MenuChoice::MarkSolved,
        MenuChoice::SearchByTopic,
        MenuChoice::SolvedByTopic,
        MenuChoice::SolvedByDate,
        MenuChoice::Undo,
        MenuChoice::SolvedOnDate,
        MenuChoice::DeleteQuestion,
        MenuChoice::Save,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |idx| idx + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddQuestion => "Add a new question",
            MenuChoice::MarkSolved => "Mark question as solved",
            MenuChoice::SearchByTopic => "Search questions by topic",
            MenuChoice::SolvedByTopic => "View solved count by topic",
            MenuChoice::SolvedByDate => "View solved count by date",
            MenuChoice::Undo => "Undo last action",
            MenuChoice::SolvedOnDate => "View all questions solved on a particular date",
            MenuChoice::DeleteQuestion => "Delete a question by ID",
            MenuChoice::Save => "Save data to file manually",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s.trim().parse().map_err(|_| InvalidChoice(s.trim().to_string()))?;
        n.checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| InvalidChoice(s.trim().to_string()))
    }
}
