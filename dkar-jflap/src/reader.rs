//! JFLAP decoder.

use crate::document::JflapDocument;
use dkar_core::{ingest, Automaton, CoreError, Decode, NameMapper};
use std::io::BufRead;

/// Name of the format in logs and errors.
pub const FORMAT_NAME: &str = "JFLAP";

/// Structure kind JFLAP uses for finite automata.
const FINITE_AUTOMATON_KIND: &str = "fa";

/// Reads JFLAP XML into an [`Automaton`], mapping state names on the way.
#[derive(Debug, Clone, Copy, Default)]
pub struct JflapReader {
    mapper: NameMapper,
}

impl JflapReader {
    pub fn new(mapper: NameMapper) -> Self {
        Self { mapper }
    }

    /// Decodes an XML string.
    pub fn parse_str(&self, xml: &str) -> Result<Automaton, CoreError> {
        let document: JflapDocument = quick_xml::de::from_str(xml)
            .map_err(|e| CoreError::malformed(FORMAT_NAME, e.to_string()))?;
        self.build(document)
    }

    fn build(&self, document: JflapDocument) -> Result<Automaton, CoreError> {
        match document.kind.as_deref() {
            None | Some(FINITE_AUTOMATON_KIND) => {}
            Some(other) => tracing::warn!(
                "JFLAP structure type is '{}', reading it as a finite automaton",
                other
            ),
        }

        let records = document.into_records();
        tracing::debug!(
            "Decoded {} state and {} transition records",
            records.states.len(),
            records.transitions.len()
        );
        ingest(records, &self.mapper)
    }
}

impl Decode for JflapReader {
    fn format_name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn decode(&self, reader: &mut dyn BufRead) -> Result<Automaton, CoreError> {
        let document: JflapDocument = quick_xml::de::from_reader(reader)
            .map_err(|e| CoreError::malformed(FORMAT_NAME, e.to_string()))?;
        self.build(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dkar_core::{OverflowPolicy, State, Symbol};
    use std::io::Cursor;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?><!--Created with JFLAP 7.1.--><structure>
	<type>fa</type>
	<automaton>
		<!--The list of states.-->
		<state id="0" name="q0">
			<x>84.0</x>
			<y>126.0</y>
			<initial/>
		</state>
		<state id="1" name="q1">
			<x>220.0</x>
			<y>126.0</y>
			<final/>
		</state>
		<!--The list of transitions.-->
		<transition>
			<from>0</from>
			<to>1</to>
			<read>0</read>
		</transition>
		<transition>
			<from>1</from>
			<to>1</to>
			<read>1</read>
		</transition>
	</automaton>
</structure>"#;

    #[test]
    fn test_parse_sample() {
        let automaton = JflapReader::default().parse_str(SAMPLE).unwrap();

        assert_eq!(automaton.start_state(), Some(&State::new("A")));
        assert!(automaton.is_final(&State::new("B")));
        assert_eq!(automaton.states().len(), 2);
        assert_eq!(automaton.input_alphabet().len(), 2);
        assert_eq!(
            automaton.transition(&State::new("A"), &Symbol::new("0")),
            Some(&State::new("B"))
        );
        assert_eq!(
            automaton.transition(&State::new("B"), &Symbol::new("1")),
            Some(&State::new("B"))
        );
        assert!(automaton.validate().is_ok());
    }

    #[test]
    fn test_decode_from_reader() {
        let mut reader = Cursor::new(SAMPLE.as_bytes());
        let automaton = JflapReader::default().decode(&mut reader).unwrap();
        assert_eq!(automaton.states().len(), 2);
    }

    #[test]
    fn test_empty_read_is_empty_symbol() {
        let xml = r#"<structure><automaton>
            <state id="0" name="s"><initial/></state>
            <transition><from>0</from><to>0</to><read/></transition>
        </automaton></structure>"#;

        let automaton = JflapReader::default().parse_str(xml).unwrap();
        assert_eq!(
            automaton.transition(&State::new("s"), &Symbol::new("")),
            Some(&State::new("s"))
        );
    }

    #[test]
    fn test_missing_read_rejected() {
        let xml = r#"<structure><automaton>
            <state id="0" name="q0"><initial/></state>
            <transition><from>0</from><to>0</to></transition>
        </automaton></structure>"#;

        assert!(matches!(
            JflapReader::default().parse_str(xml),
            Err(CoreError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_attribute_endpoints() {
        let xml = r#"<structure><automaton>
            <state id="3" name="q0"><initial/></state>
            <state id="5" name="q1"/>
            <transition from="3" to="5"><read>a</read></transition>
        </automaton></structure>"#;

        let automaton = JflapReader::default().parse_str(xml).unwrap();
        assert_eq!(
            automaton.transition(&State::new("A"), &Symbol::new("a")),
            Some(&State::new("B"))
        );
    }

    #[test]
    fn test_interleaved_elements() {
        let xml = r#"<structure><automaton>
            <state id="0" name="q0"><initial/></state>
            <transition><from>0</from><to>1</to><read>a</read></transition>
            <state id="1" name="q1"><final/></state>
        </automaton></structure>"#;

        let automaton = JflapReader::default().parse_str(xml).unwrap();
        assert_eq!(automaton.states().len(), 2);
        assert!(automaton.is_final(&State::new("B")));
    }

    #[test]
    fn test_bad_state_name() {
        let xml = r#"<structure><automaton>
            <state id="0" name="qX"><initial/></state>
        </automaton></structure>"#;

        assert!(matches!(
            JflapReader::default().parse_str(xml),
            Err(CoreError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_strict_name_policy() {
        let xml = r#"<structure><automaton>
            <state id="0" name="q26"><initial/></state>
        </automaton></structure>"#;

        let preserve = JflapReader::default().parse_str(xml).unwrap();
        assert_eq!(preserve.start_state(), Some(&State::new("[")));

        let strict = JflapReader::new(NameMapper::new(OverflowPolicy::Reject));
        assert!(matches!(
            strict.parse_str(xml),
            Err(CoreError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_malformed_xml() {
        let result = JflapReader::default().parse_str("<structure><automaton><state id=");
        assert!(matches!(
            result,
            Err(CoreError::Malformed {
                format: FORMAT_NAME,
                ..
            })
        ));
    }

    #[test]
    fn test_non_numeric_id_is_malformed() {
        let xml = r#"<structure><automaton>
            <state id="zero" name="q0"><initial/></state>
        </automaton></structure>"#;

        assert!(matches!(
            JflapReader::default().parse_str(xml),
            Err(CoreError::Malformed { .. })
        ));
    }
}
