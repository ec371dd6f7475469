use combsim::{
    netlist::{self, File},
    table::{self, Format, TableOptions},
    EvalError, GateId, Network,
};

const FULL_ADDER: &str = "
4 cout or   2 3
0 p    xor  I0 I1
1 sum  xor  0 I2
2 g    and  I0 I1
3 t    and  0 I2
";

fn network(contents: &str) -> Network {
    let file = File { name: "adder.in".into(), contents: contents.into() };
    Network::new(netlist::parse(&file).unwrap()).unwrap()
}

#[test]
fn full_adder() {
    let network = network(FULL_ADDER);
    assert_eq!(network.input_width(), 3);
    network.check().unwrap();

    for row in combsim::enumerate(&network) {
        let (assignment, values) = row.unwrap();
        let total = assignment.iter().filter(|&&bit| bit).count();
        assert_eq!(values[GateId(1)], total % 2 == 1, "sum for {:?}", &*assignment);
        assert_eq!(values[GateId(4)], total >= 2, "carry for {:?}", &*assignment);
    }
}

#[test]
fn full_adder_csv() {
    let network = network(FULL_ADDER);
    let options = TableOptions { format: Format::Csv, outputs: vec![GateId(1), GateId(4)] };

    let mut out = Vec::new();
    table::write_table(&mut out, &network, combsim::enumerate(&network), &options).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "I0,I1,I2,SUM,COUT\n0,0,0,0,0\n0,0,1,1,0\n0,1,0,1,0\n0,1,1,0,1\n1,0,0,1,0\n1,0,1,0,1\n1,1,0,0,1\n1,1,1,1,1\n"
    );
}

#[test]
fn parallel_matches_sequential() {
    let network = network(FULL_ADDER);
    let sequential: Vec<_> = combsim::enumerate(&network).collect::<Result<_, _>>().unwrap();
    assert_eq!(combsim::enumerate_parallel(&network).unwrap(), sequential);
}

#[test]
fn cyclic_netlist() {
    let network = network("0 a and 1 I0\n1 b or 0 I1\n");
    assert!(matches!(network.check(), Err(EvalError::CyclicOrUnsatisfiableNetwork { .. })));

    let first = combsim::enumerate(&network).next().unwrap();
    assert_eq!(first, Err(EvalError::CyclicOrUnsatisfiableNetwork { unresolved: vec![GateId(0), GateId(1)], cycle: vec![GateId(0), GateId(1)] }));
}

#[test]
fn load_from_disk() {
    let dir = std::env::temp_dir();
    let text = dir.join(format!("combsim-{}.in", std::process::id()));
    let json = dir.join(format!("combsim-{}.json", std::process::id()));
    std::fs::write(&text, "0 inv not I0\n1 both and 0 I1\n").unwrap();
    std::fs::write(&json, r#"{"gates": [{"id": 0, "name": "inv", "type": "not", "inputs": ["I0"]}, {"id": 1, "name": "both", "type": "and", "inputs": [0, "I1"]}]}"#).unwrap();

    let from_text = combsim::load(text.to_str().unwrap()).unwrap();
    let from_json = combsim::load(json.to_str().unwrap()).unwrap();
    assert_eq!(from_text, from_json);

    let values = combsim::evaluate_all(&from_text, &[false, true]).unwrap();
    assert_eq!(values.as_slice(), &[true, true]);

    std::fs::remove_file(text).unwrap();
    std::fs::remove_file(json).unwrap();
}

#[test]
fn load_reports_parse_errors() {
    let path = std::env::temp_dir().join(format!("combsim-bad-{}.in", std::process::id()));
    std::fs::write(&path, "0 a and I0\n1 b frob I0\nq c or I1\n").unwrap();

    let error = combsim::load(path.to_str().unwrap()).unwrap_err().to_string();
    let name = path.to_str().unwrap();
    assert_eq!(error, format!("error at {name}:2: invalid gate type 'frob'\nerror at {name}:3: invalid gate id 'q'"));

    std::fs::remove_file(path).unwrap();
}
