//! Serde mapping of the JFLAP XML document.
//!
//! ```xml
//! <structure>
//!   <type>fa</type>
//!   <automaton>
//!     <state id="0" name="q0"><x>60.0</x><y>80.0</y><initial/></state>
//!     <state id="1" name="q1"><x>200.0</x><y>80.0</y><final/></state>
//!     <transition><from>0</from><to>1</to><read>a</read></transition>
//!   </automaton>
//! </structure>
//! ```
//!
//! Coordinates, labels and other presentation data are ignored.

use dkar_core::{RecordSet, StateRecord, TransitionRecord};
use serde::Deserialize;

/// Root element. Its name is not checked.
#[derive(Debug, Deserialize)]
pub struct JflapDocument {
    /// Structure kind; `fa` for finite automata.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    pub automaton: JflapAutomaton,
}

#[derive(Debug, Default, Deserialize)]
pub struct JflapAutomaton {
    #[serde(rename = "state", default)]
    pub states: Vec<JflapState>,

    #[serde(rename = "transition", default)]
    pub transitions: Vec<JflapTransition>,
}

#[derive(Debug, Deserialize)]
pub struct JflapState {
    #[serde(rename = "@id")]
    pub id: i32,

    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(default)]
    pub initial: Option<Marker>,

    #[serde(rename = "final", default)]
    pub accepting: Option<Marker>,
}

/// An element whose presence is the whole message, e.g. `<initial/>`.
#[derive(Debug, Deserialize)]
pub struct Marker {}

#[derive(Debug, Deserialize)]
pub struct JflapTransition {
    #[serde(alias = "@from")]
    pub from: i32,

    #[serde(alias = "@to")]
    pub to: i32,

    #[serde(default)]
    pub read: Option<ReadSymbol>,
}

/// Text of a `<read>` element; `<read/>` is the empty symbol.
#[derive(Debug, Deserialize)]
pub struct ReadSymbol {
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl JflapDocument {
    /// Flattens the document into source records, keeping document order.
    pub fn into_records(self) -> RecordSet {
        let states = self
            .automaton
            .states
            .into_iter()
            .map(|s| StateRecord {
                id: s.id,
                name: s.name,
                initial: s.initial.is_some(),
                accepting: s.accepting.is_some(),
            })
            .collect();

        let transitions = self
            .automaton
            .transitions
            .into_iter()
            .map(|t| TransitionRecord {
                from: t.from,
                to: t.to,
                read: t.read.map(|r| r.value),
            })
            .collect();

        RecordSet {
            states,
            transitions,
        }
    }
}
