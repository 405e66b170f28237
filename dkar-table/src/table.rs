//! DKAR table reader.
//!
//! DKAR does not name the input symbols; columns are only ordered. A parsed
//! [`DkarTable`] can be turned back into an [`Automaton`] once the caller
//! supplies the alphabet in column order.

use crate::writer::{FORMAT_TAG, MISSING_TRANSITION};
use dkar_core::{Automaton, CoreError, State, Symbol, TransitionTable};
use std::collections::{HashMap, HashSet};

/// One row of the transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub state: State,
    /// One entry per symbol column; `None` for a missing transition.
    pub destinations: Vec<Option<State>>,
}

/// A parsed DKAR table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DkarTable {
    pub symbol_count: usize,
    pub rows: Vec<Row>,
    pub start_state: State,
    pub final_states: Vec<State>,
}

impl DkarTable {
    /// Parses DKAR text.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (lineno, tag) = next_line(&mut lines, "format tag")?;
        if tag != FORMAT_TAG {
            return Err(malformed(
                lineno,
                format!("expected '{}', got '{}'", FORMAT_TAG, tag),
            ));
        }

        let state_count = parse_count(next_line(&mut lines, "state count")?)?;
        let symbol_count = parse_count(next_line(&mut lines, "symbol count")?)?;

        let mut rows = Vec::with_capacity(state_count);
        for _ in 0..state_count {
            let (lineno, line) = next_line(&mut lines, "state row")?;
            let (name, cells) = line
                .split_once(": ")
                .ok_or_else(|| malformed(lineno, "state row has no ': ' separator"))?;

            let destinations: Vec<Option<State>> = if cells.is_empty() {
                Vec::new()
            } else {
                cells
                    .split(' ')
                    .map(|cell| (cell != MISSING_TRANSITION).then(|| State::new(cell)))
                    .collect()
            };
            if destinations.len() != symbol_count {
                return Err(malformed(
                    lineno,
                    format!(
                        "row '{}' has {} columns, expected {}",
                        name,
                        destinations.len(),
                        symbol_count
                    ),
                ));
            }

            rows.push(Row {
                state: State::new(name),
                destinations,
            });
        }

        let (_, start) = next_line(&mut lines, "start state")?;
        let start_state = State::new(start);

        let (lineno, line) = next_line(&mut lines, "final states")?;
        let (count, names) = line
            .split_once(' ')
            .ok_or_else(|| malformed(lineno, "final state line has no ' ' separator"))?;
        let final_count = parse_count((lineno, count))?;
        let final_states: Vec<State> = names
            .split(' ')
            .filter(|name| !name.is_empty())
            .map(State::new)
            .collect();
        if final_states.len() != final_count {
            return Err(malformed(
                lineno,
                format!(
                    "{} final states listed, expected {}",
                    final_states.len(),
                    final_count
                ),
            ));
        }

        if let Some((lineno, extra)) = lines.find(|(_, line)| !line.is_empty()) {
            return Err(malformed(lineno, format!("unexpected trailing line '{}'", extra)));
        }

        Ok(Self {
            symbol_count,
            rows,
            start_state,
            final_states,
        })
    }

    /// Returns the destination of `state` in symbol column `column`.
    pub fn destination(&self, state: &State, column: usize) -> Option<&State> {
        self.rows
            .iter()
            .find(|row| &row.state == state)
            .and_then(|row| row.destinations.get(column))
            .and_then(Option::as_ref)
    }

    /// Rebuilds an automaton, naming the columns with `alphabet` in order.
    ///
    /// The collections are installed wholesale and the result is validated.
    pub fn into_automaton(self, alphabet: Vec<Symbol>) -> Result<Automaton, CoreError> {
        if alphabet.len() != self.symbol_count {
            return Err(CoreError::InvalidArgument {
                reason: format!(
                    "alphabet has {} symbols, table has {} columns",
                    alphabet.len(),
                    self.symbol_count
                ),
            });
        }

        let states: HashSet<State> = self.rows.iter().map(|row| row.state.clone()).collect();
        let mut transitions = TransitionTable::new();
        for row in self.rows {
            let edges: HashMap<Symbol, State> = alphabet
                .iter()
                .cloned()
                .zip(row.destinations)
                .filter_map(|(symbol, to)| to.map(|to| (symbol, to)))
                .collect();
            if !edges.is_empty() {
                transitions.insert(row.state, edges);
            }
        }

        let mut automaton = Automaton::new();
        automaton.set_states(states);
        automaton.set_input_alphabet(alphabet.into_iter().collect());
        automaton.set_transitions(transitions);
        automaton.set_final_states(self.final_states.into_iter().collect());
        automaton.replace_start_state(Some(self.start_state));
        automaton.validate()?;
        Ok(automaton)
    }
}

fn next_line<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    what: &str,
) -> Result<(usize, &'a str), CoreError> {
    lines
        .next()
        .ok_or_else(|| CoreError::malformed(FORMAT_TAG, format!("missing {}", what)))
}

fn parse_count((lineno, text): (usize, &str)) -> Result<usize, CoreError> {
    text.parse()
        .map_err(|_| malformed(lineno, format!("'{}' is not a count", text)))
}

fn malformed(lineno: usize, reason: impl Into<String>) -> CoreError {
    CoreError::malformed(FORMAT_TAG, format!("line {}: {}", lineno, reason.into()))
}
