use serde::Serialize;

/// One participant paired with the number drawn for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub identifier: String,
    pub number: u32,
}

/// A cell of a printed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Ticket(u32),
    Empty,
}

impl Slot {
    pub fn number(&self) -> Option<u32> {
        match self {
            Slot::Ticket(number) => Some(*number),
            Slot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// One printed sheet. `slots` always has exactly rows * columns entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub slots: Vec<Slot>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ticket_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn numbers(&self) -> Vec<u32> {
        self.slots.iter().filter_map(Slot::number).collect()
    }
}

/// Row of the optional assignments file.
#[derive(Debug, Serialize)]
pub struct AssignmentRow<'a> {
    #[serde(rename = "Email")]
    pub email: &'a str,
    #[serde(rename = "Number")]
    pub number: u32,
    #[serde(rename = "Organization")]
    pub organization: &'a str,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub identifiers: usize,
    pub tickets: usize,
    pub pages: usize,
    pub output_path: String,
    pub assignments_path: Option<String>,
}
