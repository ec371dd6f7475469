//! Reader for the plain text netlist format.
//!
//! Each non-blank line defines one gate as whitespace separated fields: `ID NAME TYPE INPUT...`. An input is either a primary input written `I<k>` or the bare id of another gate. Names, types and inputs are case-insensitive.
//!
//! ```text
//! 0 inv   not  i0
//! 1 both  and  0 I1
//! ```

pub mod file;

pub use file::{File, Location};

use crate::{
    error::EvalError,
    gate::GateKind,
    network::{GateId, GateSpec, InputRef, Network},
    utils::CollectAll,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error at {location}: {kind}")]
pub struct ParseError {
    pub location: Location,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected gate {0}")]
    MissingField(&'static str),
    #[error("invalid gate id '{0}'")]
    InvalidId(String),
    #[error("invalid input '{0}' (expected I<n> or a gate id)")]
    InvalidInput(String),
    #[error(transparent)]
    Gate(#[from] EvalError),
}

/// Every error found in one file.
#[derive(Debug, thiserror::Error)]
#[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
pub struct ParseErrors(pub Vec<ParseError>);

pub fn parse(file: &File) -> Result<Vec<GateSpec>, Vec<ParseError>> {
    file.lines().filter(|(_, line)| !line.trim().is_empty()).map(|(location, line)| parse_line(line).map_err(|kind| ParseError { location, kind })).collect_all()
}

/// Reads and parses a netlist file and builds a network from it.
pub fn load(filename: &str) -> Result<Network, Box<dyn std::error::Error>> {
    let file = File::load(filename)?;
    let gates = parse(&file).map_err(ParseErrors)?;
    log::debug!("read {} gates from {}", gates.len(), file.name);
    Ok(Network::new(gates)?)
}

fn parse_line(line: &str) -> Result<GateSpec, ParseErrorKind> {
    let mut fields = line.split_whitespace();

    let id = fields.next().ok_or(ParseErrorKind::MissingField("id"))?;
    let id = id.parse::<usize>().map_err(|_| ParseErrorKind::InvalidId(id.to_string()))?;
    let name = fields.next().ok_or(ParseErrorKind::MissingField("name"))?;
    let kind = fields.next().ok_or(ParseErrorKind::MissingField("type"))?.parse::<GateKind>()?;
    let inputs = fields.map(parse_input).collect::<Result<Vec<_>, _>>()?;

    Ok(GateSpec::new(id, name, kind, inputs))
}

/// Parses one input token: `I<k>` (any case) for primary input `k`, otherwise a gate id.
pub fn parse_input(token: &str) -> Result<InputRef, ParseErrorKind> {
    let upper = token.to_uppercase();
    let invalid = || ParseErrorKind::InvalidInput(token.to_string());

    match upper.strip_prefix('I') {
        Some(index) => index.parse::<usize>().map(InputRef::Primary).map_err(|_| invalid()),
        None => upper.parse::<usize>().map(|id| InputRef::Gate(GateId(id))).map_err(|_| invalid()),
    }
}

#[cfg(test)]
mod test {
    use super::{parse, parse_input, File, Location, ParseError, ParseErrorKind};
    use crate::{
        error::EvalError,
        gate::GateKind,
        network::{GateId, GateSpec, InputRef},
    };

    fn at(line: usize, kind: ParseErrorKind) -> ParseError {
        ParseError { location: Location { file: "<test file>".into(), line }, kind }
    }

    #[test]
    fn gates() {
        let file = File::test_file("0 inv not i0\n\n1   Both AND 0 I1\n  \n2 x xnor i2 1 0 I0\n");
        assert_eq!(
            parse(&file),
            Ok(vec![
                GateSpec::new(0, "INV", GateKind::Not, vec![InputRef::Primary(0)]),
                GateSpec::new(1, "BOTH", GateKind::And, vec![InputRef::Gate(GateId(0)), InputRef::Primary(1)]),
                GateSpec::new(2, "X", GateKind::Xnor, vec![InputRef::Primary(2), InputRef::Gate(GateId(1)), InputRef::Gate(GateId(0)), InputRef::Primary(0)]),
            ])
        );
    }

    #[test]
    fn name_is_upper_cased() {
        let gates = parse(&File::test_file("3 carry_out or I0 I1")).unwrap();
        assert_eq!(gates[0].name, "CARRY_OUT");
        assert_eq!(gates[0].id, GateId(3));
    }

    #[test]
    fn no_inputs() {
        assert_eq!(parse(&File::test_file("0 a and")), Ok(vec![GateSpec::new(0, "a", GateKind::And, vec![])]));
    }

    #[test]
    fn inputs() {
        assert_eq!(parse_input("i12"), Ok(InputRef::Primary(12)));
        assert_eq!(parse_input("7"), Ok(InputRef::Gate(GateId(7))));
        assert_eq!(parse_input("I"), Err(ParseErrorKind::InvalidInput("I".into())));
        assert_eq!(parse_input("x3"), Err(ParseErrorKind::InvalidInput("x3".into())));
        assert_eq!(parse_input("-1"), Err(ParseErrorKind::InvalidInput("-1".into())));
    }

    #[test]
    fn reports_every_bad_line() {
        let file = File::test_file("0 a and I0\nx b or I1\n2 c\n3 d buf I0\n4 e or I0 q\n5 f not I0");
        assert_eq!(
            parse(&file),
            Err(vec![
                at(2, ParseErrorKind::InvalidId("x".into())),
                at(3, ParseErrorKind::MissingField("type")),
                at(4, ParseErrorKind::Gate(EvalError::InvalidGateKind { kind: "buf".into() })),
                at(5, ParseErrorKind::InvalidInput("q".into())),
            ])
        );
    }

    #[test]
    fn error_message() {
        let errors = parse(&File::test_file("0 a nope I0")).unwrap_err();
        assert_eq!(errors[0].to_string(), "error at <test file>:1: invalid gate type 'nope'");
    }
}
