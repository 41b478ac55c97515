use pretty_assertions::assert_eq;
use rstruth::expr::{and, constant, iff, implies, nand, nor, not, or, var, xnor, xor};
use rstruth::{Assignment, BinaryOperator, Expression, LogicError};
use std::rc::Rc;

fn assign(values: &[(&str, bool)]) -> Assignment {
    values.iter().copied().collect()
}

#[test]
fn test_render_atoms() {
    assert_eq!(constant(true).to_string(), "T");
    assert_eq!(constant(false).to_string(), "F");
    assert_eq!(var("p").to_string(), "p");
    assert_eq!(var("abc").render(), "abc");
}

#[test]
fn test_render_brackets() {
    assert_eq!(and(var("x"), or(var("y"), var("z"))).to_string(), "x ^ (y v z)");
    assert_eq!(or(and(var("x"), var("y")), var("z")).to_string(), "(x ^ y) v z");

    // nested binaries are bracketed even under the same connective
    assert_eq!(
        and(and(var("p"), var("q")), var("r")).to_string(),
        "(p ^ q) ^ r"
    );

    assert_eq!(not(var("p")).to_string(), "~p");
    assert_eq!(not(not(var("p"))).to_string(), "~~p");
    assert_eq!(not(constant(false)).to_string(), "~F");
    assert_eq!(not(and(var("p"), var("q"))).to_string(), "~(p ^ q)");
    assert_eq!(
        implies(not(var("p")), not(or(var("q"), constant(true)))).to_string(),
        "~p -> ~(q v T)"
    );
}

#[test]
fn test_render_symbols() {
    let p = var("p");
    let q = var("q");

    assert_eq!(xor(p.clone(), q.clone()).to_string(), "p xor q");
    assert_eq!(nand(p.clone(), q.clone()).to_string(), "p NAND q");
    assert_eq!(nor(p.clone(), q.clone()).to_string(), "p NOR q");
    assert_eq!(xnor(p.clone(), q.clone()).to_string(), "p XNOR q");
    assert_eq!(implies(p.clone(), q.clone()).to_string(), "p -> q");
    assert_eq!(iff(p, q).to_string(), "p <-> q");
}

#[test]
fn test_truth_functions() {
    let cases: Vec<(BinaryOperator, [bool; 4])> = vec![
        (BinaryOperator::And, [true, false, false, false]),
        (BinaryOperator::Or, [true, true, true, false]),
        (BinaryOperator::Xor, [false, true, true, false]),
        (BinaryOperator::Nand, [false, true, true, true]),
        (BinaryOperator::Nor, [false, false, false, true]),
        (BinaryOperator::Xnor, [true, false, false, true]),
        (BinaryOperator::Conditional, [true, false, true, true]),
        (BinaryOperator::Biconditional, [true, false, false, true]),
    ];

    let inputs = [(true, true), (true, false), (false, true), (false, false)];

    for (op, expected) in cases {
        let e = rstruth::expr::binary(op, var("p"), var("q"));

        for ((p, q), result) in inputs.iter().zip(expected) {
            assert_eq!(
                e.evaluate(&assign(&[("p", *p), ("q", *q)])).ok(),
                Some(result),
                "{op} on ({p}, {q})"
            );
        }
    }
}

#[test]
fn test_evaluate() {
    let e = and(not(or(var("p"), var("q"))), var("q"));

    assert_eq!(e.evaluate(&assign(&[("p", false), ("q", false)])).ok(), Some(false));
    assert_eq!(e.evaluate(&assign(&[("p", false), ("q", true)])).ok(), Some(false));

    // constants ignore the assignment
    assert_eq!(constant(true).evaluate(&Assignment::new()).ok(), Some(true));
    assert_eq!(not(constant(true)).evaluate(&Assignment::new()).ok(), Some(false));

    // extra bindings are fine
    assert_eq!(
        var("p").evaluate(&assign(&[("p", true), ("z", false)])).ok(),
        Some(true)
    );
}

#[test]
fn test_unbound_variable() {
    let e = or(var("p"), var("q"));

    match e.evaluate(&assign(&[("p", true)])) {
        Err(LogicError::UnboundVariable(name)) => assert_eq!(name, "q"),
        other => panic!("expected an unbound variable, got {other:?}"),
    }
}

#[test]
fn test_free_variables() {
    let e = and(
        or(var("y"), var("x")),
        implies(var("y"), and(constant(true), not(var("abc")))),
    );

    assert_eq!(e.free_variables(), vec!["abc", "x", "y"]);
    assert_eq!(e.free_variables(), e.free_variables());
    assert!(constant(false).free_variables().is_empty());
}

#[test]
fn test_shared_subexpressions() {
    let shared = or(var("p"), var("q"));
    let e = and(shared.clone(), not(shared.clone()));

    assert_eq!(Rc::strong_count(&shared), 3);
    assert_eq!(e.to_string(), "(p v q) ^ ~(p v q)");
    assert_eq!(e.free_variables(), vec!["p", "q"]);
    assert_eq!(e.evaluate(&assign(&[("p", true), ("q", false)])).ok(), Some(false));
}

#[test]
fn test_is_atom() {
    assert!(Expression::Constant(true).is_atom());
    assert!(var("p").is_atom());
    assert!(!not(var("p")).is_atom());
}

#[test]
fn test_assignment_display() {
    let a = assign(&[("q", false), ("p", true)]);

    assert_eq!(a.to_string(), "{p: T, q: F}");
    assert_eq!(a.len(), 2);
    assert_eq!(Assignment::new().to_string(), "{}");
}

#[test]
fn test_assignment_builders() {
    let mut a = Assignment::new().with("p", true).with("q", true);

    a.set("q", false);
    a.set("r", true);

    assert_eq!(a.to_string(), "{p: T, q: F, r: T}");
    assert_eq!(a.insert("p", false), Some(true));
    assert_eq!(a.lookup("p").ok(), Some(false));
}

#[test]
fn test_constant_from_bool() {
    assert_eq!(Expression::from(true), Expression::Constant(true));
    assert_eq!(Expression::from(false).to_string(), "F");
    assert_eq!(Expression::from(false).evaluate(&Assignment::new()).ok(), Some(false));
}
