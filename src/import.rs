use json::JsonValue;

use crate::{
    gate::GateKind,
    netlist,
    network::{GateId, GateSpec, InputRef, Network},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ImportError(String);

impl From<&str> for ImportError {
    fn from(message: &str) -> Self {
        ImportError(message.to_string())
    }
}
impl From<String> for ImportError {
    fn from(message: String) -> Self {
        ImportError(message)
    }
}

/// Reads a JSON netlist:
///
/// ```json
/// { "gates": [ { "id": 0, "name": "inv", "type": "not", "inputs": ["I0"] },
///              { "id": 1, "name": "both", "type": "and", "inputs": [0, "I1"] } ] }
/// ```
pub fn import(filename: &str) -> Result<Network, Box<dyn std::error::Error>> {
    let project = std::fs::read_to_string(filename)?;
    let gates = parse(&project)?;
    log::debug!("imported {} gates from {}", gates.len(), filename);
    Ok(Network::new(gates)?)
}

pub fn parse(source: &str) -> Result<Vec<GateSpec>, ImportError> {
    let project = json::parse(source).map_err(|e| format!("invalid json: {e}"))?;

    let JsonValue::Object(mut project) = project else {
        return Err("toplevel json must be object".into());
    };
    let JsonValue::Array(gates) = project.remove("gates").ok_or("toplevel object must contain key \"gates\"")? else {
        return Err("gates must be array".into());
    };

    gates.into_iter().map(parse_gate).collect()
}

fn parse_gate(gate: JsonValue) -> Result<GateSpec, ImportError> {
    let JsonValue::Object(mut gate) = gate else { return Err("gate must be object".into()) };
    let id = gate.remove("id").ok_or("gate must have field 'id'")?.as_usize().ok_or("gate id must be non-negative integer")?;
    let name = gate.remove("name").ok_or_else(|| format!("gate {id} must have field 'name'"))?.take_string().ok_or_else(|| format!("gate {id} name must be string"))?;
    let kind = gate.remove("type").ok_or_else(|| format!("gate {id} must have field 'type'"))?.take_string().ok_or_else(|| format!("gate {id} type must be string"))?;
    let kind = kind.parse::<GateKind>().map_err(|e| format!("gate {id}: {e}"))?;
    let JsonValue::Array(inputs) = gate.remove("inputs").ok_or_else(|| format!("gate {id} must have field 'inputs'"))? else {
        return Err(format!("gate {id} inputs must be array").into());
    };

    let inputs = inputs.iter().map(|input| parse_input(id, input)).collect::<Result<Vec<_>, _>>()?;
    Ok(GateSpec::new(id, &name, kind, inputs))
}

fn parse_input(id: usize, input: &JsonValue) -> Result<InputRef, ImportError> {
    match input {
        JsonValue::Number(_) => input.as_usize().map(|gate| InputRef::Gate(GateId(gate))).ok_or_else(|| format!("gate {id} input must be non-negative integer").into()),
        JsonValue::String(_) | JsonValue::Short(_) => {
            let token = input.as_str().unwrap_or_default();
            netlist::parse_input(token).map_err(|e| format!("gate {id}: {e}").into())
        }
        _ => Err(format!("gate {id} input must be string or number").into()),
    }
}

#[cfg(test)]
mod test {
    use super::{parse, ImportError};
    use crate::{
        gate::GateKind,
        network::{GateId, GateSpec, InputRef},
    };

    #[test]
    fn gates() {
        let source = r#"{ "gates": [
            { "id": 1, "name": "both", "type": "AND", "inputs": [0, "I1"] },
            { "id": 0, "name": "inv", "type": "not", "inputs": ["i0"] }
        ] }"#;
        assert_eq!(
            parse(source),
            Ok(vec![
                GateSpec::new(1, "BOTH", GateKind::And, vec![InputRef::Gate(GateId(0)), InputRef::Primary(1)]),
                GateSpec::new(0, "INV", GateKind::Not, vec![InputRef::Primary(0)]),
            ])
        );
    }

    #[test]
    fn errors() {
        assert_eq!(parse("[]"), Err(ImportError("toplevel json must be object".into())));
        assert_eq!(parse("{}"), Err(ImportError("toplevel object must contain key \"gates\"".into())));
        assert_eq!(parse(r#"{"gates": [{"id": 0, "name": "a", "type": "buf", "inputs": []}]}"#), Err(ImportError("gate 0: invalid gate type 'buf'".into())));
        assert_eq!(parse(r#"{"gates": [{"id": 0, "name": "a", "type": "or", "inputs": [true]}]}"#), Err(ImportError("gate 0 input must be string or number".into())));
        assert_eq!(parse(r#"{"gates": [{"id": 2, "type": "or", "inputs": []}]}"#), Err(ImportError("gate 2 must have field 'name'".into())));
        assert!(parse("{").is_err());
    }
}
