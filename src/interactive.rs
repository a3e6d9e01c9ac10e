//! Interactive terminal form over the session state.
//!
//! A readline loop that mirrors the calculator form: two tabs, editable rows
//! with stable numbering, a live SGPA preview, and a transient "Calculating"
//! state for the cumulative average.

use acadcalc::analyzers::classify::classify;
use acadcalc::analyzers::utility::format_points;
use acadcalc::grades::GradeSymbol;
use acadcalc::session::{FormState, Outcome, Tab};
use anyhow::Result;
use rustyline::DefaultEditor;
use std::time::Duration;
use tracing::debug;

const HELP: &str = "\
Commands:
  tab sgpa|cgpa          switch calculator
  add                    append a row
  rm <row>               remove a row (the last row stays)
  set <row> <field> <value...>
                         edit a row; fields: name, grade, credits (sgpa tab)
                         name, sgpa, credits (cgpa tab)
  list                   show rows
  grades                 show the grade table
  calc                   calculate
  reset                  clear the active tab
  help                   show this help
  exit                   quit";

/// Runs the form loop. `delay` is the cosmetic pause before a CGPA result
/// becomes visible; it carries no semantic meaning.
pub fn run(delay: Option<Duration>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut state = FormState::new();

    println!("acadcalc interactive mode. Type 'help' for commands, 'exit' to quit.");
    print_rows(&state);

    loop {
        let prompt = match state.tab() {
            Tab::Sgpa => "sgpa> ",
            Tab::Cgpa => "cgpa> ",
        };

        let line = match rl.readline(prompt) {
            Ok(line) => line,
            Err(_) => {
                println!("Goodbye!");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);
        debug!(command = line, "Form command");

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();

        match command {
            "exit" | "quit" => {
                println!("Goodbye!");
                break;
            }
            "help" => println!("{HELP}"),
            "tab" => match parts.next() {
                Some("sgpa") => {
                    state.switch_tab(Tab::Sgpa);
                    print_rows(&state);
                }
                Some("cgpa") => {
                    state.switch_tab(Tab::Cgpa);
                    print_rows(&state);
                }
                _ => println!("Usage: tab sgpa|cgpa"),
            },
            "add" => {
                match state.tab() {
                    Tab::Sgpa => {
                        state.add_subject();
                    }
                    Tab::Cgpa => {
                        state.add_semester();
                    }
                }
                print_rows(&state);
            }
            "rm" => match parts.next().and_then(|raw| raw.parse::<usize>().ok()) {
                Some(index) => {
                    let removed = match row_id(&state, index) {
                        Some(id) => match state.tab() {
                            Tab::Sgpa => state.remove_subject(id),
                            Tab::Cgpa => state.remove_semester(id),
                        },
                        None => false,
                    };
                    if removed {
                        print_rows(&state);
                        print_preview(&state);
                    } else {
                        println!("Cannot remove row {index}");
                    }
                }
                None => println!("Usage: rm <row>"),
            },
            "set" => {
                let index = parts.next().and_then(|raw| raw.parse::<usize>().ok());
                let field = parts.next();
                let value = parts.collect::<Vec<_>>().join(" ");
                match (index, field) {
                    (Some(index), Some(field)) => {
                        if set_field(&mut state, index, field, &value) {
                            print_rows(&state);
                            print_preview(&state);
                        }
                    }
                    _ => println!("Usage: set <row> <field> <value...>"),
                }
            }
            "list" => print_rows(&state),
            "grades" => {
                for symbol in GradeSymbol::ALL {
                    println!("  {:<3} {}", symbol.as_str(), symbol.points());
                }
            }
            "calc" => calculate(&mut state, delay),
            "reset" => {
                state.reset();
                print_rows(&state);
            }
            _ => println!("Unknown command '{command}'. Type 'help' for commands."),
        }
    }

    Ok(())
}

/// Maps a 1-based display index to the row id on the active tab.
fn row_id(state: &FormState, index: usize) -> Option<u64> {
    let idx = index.checked_sub(1)?;
    match state.tab() {
        Tab::Sgpa => state.subjects().get(idx).map(|row| row.id),
        Tab::Cgpa => state.semesters().get(idx).map(|row| row.id),
    }
}

fn set_field(state: &mut FormState, index: usize, field: &str, value: &str) -> bool {
    let Some(id) = row_id(state, index) else {
        println!("No row {index}");
        return false;
    };

    let ok = match (state.tab(), field) {
        (Tab::Sgpa, "name") => {
            if let Some(row) = state.subject_mut(id) {
                row.name = value.to_string();
            }
            true
        }
        (Tab::Sgpa, "grade") => {
            if value.is_empty() {
                if let Some(row) = state.subject_mut(id) {
                    row.grade.clear();
                }
                true
            } else if FormState::is_valid_grade(value) {
                if let Some(row) = state.subject_mut(id) {
                    row.grade = value.trim().to_uppercase();
                }
                true
            } else {
                let symbols: Vec<&str> = GradeSymbol::ALL.iter().map(|s| s.as_str()).collect();
                println!("Unknown grade '{}'. Valid grades: {}", value, symbols.join(", "));
                false
            }
        }
        (Tab::Sgpa, "credits") => {
            if let Some(row) = state.subject_mut(id) {
                row.credits = value.to_string();
            }
            true
        }
        (Tab::Cgpa, "name") => {
            if let Some(row) = state.semester_mut(id) {
                row.semester = value.to_string();
            }
            true
        }
        (Tab::Cgpa, "sgpa") => state.set_semester_sgpa(id, value),
        (Tab::Cgpa, "credits") => {
            if let Some(row) = state.semester_mut(id) {
                row.credits = value.to_string();
            }
            true
        }
        (tab, _) => {
            let fields = match tab {
                Tab::Sgpa => "name, grade, credits",
                Tab::Cgpa => "name, sgpa, credits",
            };
            println!("Unknown field '{field}'. Fields: {fields}");
            false
        }
    };

    if ok {
        state.mark_touched(id);
    }
    ok
}

fn print_rows(state: &FormState) {
    match state.tab() {
        Tab::Sgpa => {
            println!("Subjects:");
            for (idx, row) in state.subjects().iter().enumerate() {
                let marker = if state.is_subject_invalid(row) { "!" } else { " " };
                println!(
                    "{} {:>2}. name: {:<20} grade: {:<4} credits: {}",
                    marker,
                    idx + 1,
                    blank_or(&row.name),
                    blank_or(&row.grade),
                    blank_or(&row.credits),
                );
            }
        }
        Tab::Cgpa => {
            println!("Semesters:");
            for (idx, row) in state.semesters().iter().enumerate() {
                let marker = if state.is_semester_invalid(row) { "!" } else { " " };
                println!(
                    "{} {:>2}. name: {:<20} sgpa: {:<6} credits: {}",
                    marker,
                    idx + 1,
                    blank_or(&row.semester),
                    blank_or(&row.sgpa),
                    blank_or(&row.credits),
                );
            }
        }
    }
}

fn blank_or(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Live SGPA preview, recomputed after each mutation on the SGPA tab.
fn print_preview(state: &FormState) {
    if state.tab() != Tab::Sgpa {
        return;
    }
    if let Some(value) = state.sgpa_preview() {
        println!("SGPA preview: {}", format_points(value));
    }
}

fn calculate(state: &mut FormState, delay: Option<Duration>) {
    match state.tab() {
        Tab::Sgpa => match state.calculate_sgpa() {
            Some(Outcome::Sgpa { value }) => print_value("SGPA", *value),
            _ => println!("Select a grade for at least one subject first."),
        },
        Tab::Cgpa => {
            println!("Calculating...");
            if let Some(delay) = delay {
                std::thread::sleep(delay);
            }
            match state.calculate_cgpa() {
                Outcome::Cgpa { aggregate } => {
                    let value = aggregate.value;
                    let calculation_type = aggregate.calculation_type;
                    print_value("CGPA", value);
                    println!("  ({calculation_type})");
                }
                Outcome::Error { message } => println!("! {message}"),
                Outcome::Sgpa { .. } => {}
            }
        }
    }
}

fn print_value(metric: &str, value: f64) {
    println!("{metric}: {}", format_points(value));
    println!("  {}", classify(value));
}
