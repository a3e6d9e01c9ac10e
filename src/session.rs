//! Session-scoped form state.
//!
//! Holds the subject and semester row lists the user is editing, with stable
//! per-row ids, touched flags, and the last calculation outcome. All state
//! lives for the current session only and is never persisted.

use std::collections::HashSet;

use crate::analyzers::cgpa::aggregate_cgpa;
use crate::analyzers::sgpa::aggregate_sgpa;
use crate::analyzers::types::{CgpaAggregate, GradeEntry, SemesterEntry};
use crate::error::CalcError;
use crate::grades::GradeSymbol;
use crate::input::{clamp_sgpa, parse_decimal};

/// Which calculator the form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sgpa,
    Cgpa,
}

/// One editable subject row. Fields hold raw user input.
#[derive(Debug, Clone, Default)]
pub struct SubjectRow {
    pub id: u64,
    pub name: String,
    pub grade: String,
    pub credits: String,
}

/// One editable semester row. Fields hold raw user input; `sgpa` is kept
/// sanitized by [`FormState::set_semester_sgpa`].
#[derive(Debug, Clone, Default)]
pub struct SemesterRow {
    pub id: u64,
    pub semester: String,
    pub sgpa: String,
    pub credits: String,
}

/// Outcome of the most recent calculation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sgpa { value: f64 },
    Cgpa { aggregate: CgpaAggregate },
    Error { message: String },
}

/// The active form: row lists, touched flags, and the last outcome.
#[derive(Debug)]
pub struct FormState {
    next_id: u64,
    tab: Tab,
    subjects: Vec<SubjectRow>,
    semesters: Vec<SemesterRow>,
    touched: HashSet<u64>,
    cgpa_touched: HashSet<u64>,
    result: Option<Outcome>,
}

impl FormState {
    /// A fresh form: one blank row in each list, SGPA tab active.
    pub fn new() -> Self {
        let mut state = FormState {
            next_id: 0,
            tab: Tab::Sgpa,
            subjects: Vec::new(),
            semesters: Vec::new(),
            touched: HashSet::new(),
            cgpa_touched: HashSet::new(),
            result: None,
        };
        let subject = state.blank_subject();
        state.subjects.push(subject);
        let semester = state.blank_semester();
        state.semesters.push(semester);
        state
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn blank_subject(&mut self) -> SubjectRow {
        SubjectRow {
            id: self.alloc_id(),
            ..SubjectRow::default()
        }
    }

    fn blank_semester(&mut self) -> SemesterRow {
        SemesterRow {
            id: self.alloc_id(),
            ..SemesterRow::default()
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switches tabs; the visible result is cleared, row lists are kept.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.result = None;
    }

    pub fn subjects(&self) -> &[SubjectRow] {
        &self.subjects
    }

    pub fn semesters(&self) -> &[SemesterRow] {
        &self.semesters
    }

    pub fn result(&self) -> Option<&Outcome> {
        self.result.as_ref()
    }

    /// Appends a blank subject row and returns its id.
    pub fn add_subject(&mut self) -> u64 {
        let row = self.blank_subject();
        let id = row.id;
        self.subjects.push(row);
        id
    }

    /// Appends a blank semester row and returns its id.
    pub fn add_semester(&mut self) -> u64 {
        let row = self.blank_semester();
        let id = row.id;
        self.semesters.push(row);
        id
    }

    /// Removes a subject row. The last remaining row cannot be removed.
    pub fn remove_subject(&mut self, id: u64) -> bool {
        if self.subjects.len() <= 1 {
            return false;
        }
        let before = self.subjects.len();
        self.subjects.retain(|row| row.id != id);
        let removed = self.subjects.len() < before;
        if removed {
            self.touched.remove(&id);
        }
        removed
    }

    /// Removes a semester row. The last remaining row cannot be removed.
    pub fn remove_semester(&mut self, id: u64) -> bool {
        if self.semesters.len() <= 1 {
            return false;
        }
        let before = self.semesters.len();
        self.semesters.retain(|row| row.id != id);
        let removed = self.semesters.len() < before;
        if removed {
            self.cgpa_touched.remove(&id);
        }
        removed
    }

    pub fn subject_mut(&mut self, id: u64) -> Option<&mut SubjectRow> {
        self.subjects.iter_mut().find(|row| row.id == id)
    }

    pub fn semester_mut(&mut self, id: u64) -> Option<&mut SemesterRow> {
        self.semesters.iter_mut().find(|row| row.id == id)
    }

    /// Stores an SGPA field value, sanitized at the moment of entry: blanks
    /// stay blank, non-numeric input becomes blank, numeric values clamp to
    /// [0, 10].
    pub fn set_semester_sgpa(&mut self, id: u64, raw: &str) -> bool {
        let sanitized = sanitize_sgpa_input(raw);
        match self.semester_mut(id) {
            Some(row) => {
                row.sgpa = sanitized;
                true
            }
            None => false,
        }
    }

    /// Marks a row as visited for presence validation.
    pub fn mark_touched(&mut self, id: u64) {
        match self.tab {
            Tab::Sgpa => self.touched.insert(id),
            Tab::Cgpa => self.cgpa_touched.insert(id),
        };
    }

    /// A touched subject row missing its name or grade is invalid.
    pub fn is_subject_invalid(&self, row: &SubjectRow) -> bool {
        self.touched.contains(&row.id) && (row.name.is_empty() || row.grade.is_empty())
    }

    /// A touched semester row missing its name or SGPA is invalid.
    pub fn is_semester_invalid(&self, row: &SemesterRow) -> bool {
        self.cgpa_touched.contains(&row.id) && (row.semester.is_empty() || row.sgpa.is_empty())
    }

    /// Typed entries for the SGPA aggregator.
    pub fn grade_entries(&self) -> Vec<GradeEntry> {
        self.subjects
            .iter()
            .map(|row| {
                crate::input::SubjectRecord {
                    name: row.name.clone(),
                    grade: row.grade.clone(),
                    credits: row.credits.clone(),
                }
                .to_entry()
            })
            .collect()
    }

    /// Typed entries for the CGPA aggregator.
    pub fn semester_entries(&self) -> Vec<SemesterEntry> {
        self.semesters
            .iter()
            .map(|row| {
                crate::input::SemesterRecord {
                    semester: row.semester.clone(),
                    sgpa: row.sgpa.clone(),
                    credits: row.credits.clone(),
                }
                .to_entry()
            })
            .collect()
    }

    /// Recomputes the live SGPA preview from the current subject rows.
    pub fn sgpa_preview(&self) -> Option<f64> {
        aggregate_sgpa(&self.grade_entries())
    }

    /// Runs the SGPA calculation and stores the outcome. Returns the stored
    /// outcome, or `None` when no row carries a grade.
    pub fn calculate_sgpa(&mut self) -> Option<&Outcome> {
        self.result = aggregate_sgpa(&self.grade_entries()).map(|value| Outcome::Sgpa { value });
        self.result.as_ref()
    }

    /// Runs the CGPA calculation and stores the outcome, error included.
    pub fn calculate_cgpa(&mut self) -> &Outcome {
        let outcome = match aggregate_cgpa(&self.semester_entries()) {
            Ok(aggregate) => Outcome::Cgpa { aggregate },
            Err(err @ CalcError::NoValidInput) => Outcome::Error {
                message: err.to_string(),
            },
        };
        self.result.insert(outcome)
    }

    /// Resets the active tab's rows to a single blank row, clearing touched
    /// flags and the last result.
    pub fn reset(&mut self) {
        match self.tab {
            Tab::Sgpa => {
                let blank = self.blank_subject();
                self.subjects = vec![blank];
                self.touched.clear();
            }
            Tab::Cgpa => {
                let blank = self.blank_semester();
                self.semesters = vec![blank];
                self.cgpa_touched.clear();
            }
        }
        self.result = None;
    }

    /// Whether a symbol is accepted by the grade field.
    pub fn is_valid_grade(raw: &str) -> bool {
        GradeSymbol::parse(raw).is_some()
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new()
    }
}

/// Entry-time sanitization for the SGPA field: blank or non-numeric input
/// becomes blank, numeric values clamp to [0, 10].
pub fn sanitize_sgpa_input(raw: &str) -> String {
    match parse_decimal(raw) {
        Some(value) => clamp_sgpa(value).to_string(),
        None => String::new(),
    }
}
