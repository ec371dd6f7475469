use std::io::Write;

use crate::{
    enumerate::Row,
    error::EvalError,
    network::{GateId, GateSpec, Network},
};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Format {
    /// Whitespace aligned columns.
    #[default]
    Columns,
    Csv,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TableOptions {
    pub format: Format,
    /// Gates to show, in this order. Empty shows every gate in id order.
    pub outputs: Vec<GateId>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("selected output {0} is not a gate in the network")]
    UnknownOutput(GateId),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Writes the header and then one line per row. Stops at the first row that is an error, after writing the rows before it.
pub fn write_table(out: &mut impl Write, network: &Network, rows: impl IntoIterator<Item = Result<Row, EvalError>>, options: &TableOptions) -> Result<(), TableError> {
    let columns = selected_gates(network, options)?;
    let width = network.input_width();

    write_header(out, width, &columns, options.format)?;
    for row in rows {
        let (assignment, values) = row?;
        let bits: Vec<String> = assignment.iter().map(|&bit| digit(bit).to_string()).collect();
        let outputs = columns.iter().map(|gate| (values.get(gate.id).map(digit).unwrap_or("?"), gate.name.as_str()));
        write_line(out, &bits, outputs, options.format)?;
    }
    Ok(())
}

fn selected_gates<'n>(network: &'n Network, options: &TableOptions) -> Result<Vec<&'n GateSpec>, TableError> {
    if options.outputs.is_empty() {
        Ok(network.gates().iter().collect())
    } else {
        options.outputs.iter().map(|id| network.gate(*id).ok_or(TableError::UnknownOutput(*id))).collect()
    }
}

fn write_header(out: &mut impl Write, width: usize, columns: &[&GateSpec], format: Format) -> std::io::Result<()> {
    let inputs: Vec<String> = (0..width).map(|i| format!("I{i}")).collect();
    write_line(out, &inputs, columns.iter().map(|gate| (gate.name.as_str(), gate.name.as_str())), format)
}

// `outputs` pairs each cell with the gate name that sets its column width
fn write_line<'a>(out: &mut impl Write, inputs: &[String], outputs: impl Iterator<Item = (&'a str, &'a str)>, format: Format) -> std::io::Result<()> {
    match format {
        Format::Columns => {
            for (i, cell) in inputs.iter().enumerate() {
                write!(out, "{:<w$}", cell, w = i.to_string().len() + 2)?;
            }
            for (cell, name) in outputs {
                write!(out, "{:<w$}", cell, w = name.len() + 1)?;
            }
        }
        Format::Csv => {
            for cell in inputs {
                write!(out, "{cell},")?;
            }
            write!(out, "{}", outputs.map(|(cell, _)| cell).collect::<Vec<_>>().join(","))?;
        }
    }
    writeln!(out)
}

fn digit(bit: bool) -> &'static str {
    if bit {
        "1"
    } else {
        "0"
    }
}

/// Lists the gates in id order with their types and inputs.
pub fn write_gate_list(out: &mut impl Write, network: &Network) -> std::io::Result<()> {
    writeln!(out, "ID      Name            Type    Inputs")?;
    writeln!(out, "{}", "-".repeat(80))?;
    for gate in network.gates() {
        write!(out, "{:<8}{:<16}{:<4}    ", gate.id, gate.name, gate.kind)?;
        for input in &gate.inputs {
            write!(out, "{:<5}  ", input.to_string())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Truth table of a single gate kind, `I0 I1 ... OUT`.
pub fn write_gate_table(out: &mut impl Write, rows: &[(Vec<bool>, bool)]) -> std::io::Result<()> {
    let arity = rows.first().map(|(inputs, _)| inputs.len()).unwrap_or(0);
    for i in 0..arity {
        write!(out, "I{i} ")?;
    }
    writeln!(out, "OUT")?;

    for (inputs, output) in rows {
        for input in inputs {
            write!(out, "{:>2} ", digit(*input))?;
        }
        writeln!(out, "{:>2}", digit(*output))?;
    }
    Ok(())
}
