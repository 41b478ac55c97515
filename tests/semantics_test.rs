use pretty_assertions::assert_eq;

use rstruth::expr::{and, constant, iff, implies, nand, not, or, var, xnor};
use rstruth::{Argument, Expression, LogicError, LogicResult, TableConfig};
use std::rc::Rc;

#[test]
fn test_tautologies() -> LogicResult<()> {
    // excluded middle
    assert!(or(var("p"), not(var("p"))).is_tautology()?);
    assert!(implies(var("p"), var("p")).is_tautology()?);
    assert!(iff(var("p"), not(not(var("p")))).is_tautology()?);
    assert!(constant(true).is_tautology()?);

    assert!(!var("p").is_tautology()?);
    assert!(!constant(false).is_tautology()?);
    assert!(!implies(var("p"), var("q")).is_tautology()?);

    // de morgan
    let p = var("p");
    let q = var("q");
    assert!(iff(nand(p.clone(), q.clone()), or(not(p.clone()), not(q.clone()))).is_tautology()?);

    Ok(())
}

#[test]
fn test_contradictions() -> LogicResult<()> {
    assert!(and(var("p"), not(var("p"))).is_contradiction()?);
    assert!(constant(false).is_contradiction()?);
    assert!(xnor(var("p"), not(var("p"))).is_contradiction()?);

    assert!(!var("p").is_contradiction()?);
    assert!(!constant(true).is_contradiction()?);

    Ok(())
}

#[test]
fn test_satisfiable_and_equivalent() -> LogicResult<()> {
    assert!(and(var("p"), var("q")).is_satisfiable()?);
    assert!(!and(var("p"), constant(false)).is_satisfiable()?);

    let a = implies(var("p"), var("q"));
    let b = or(not(var("p")), var("q"));
    assert!(a.is_equivalent(&b)?);
    assert!(!a.is_equivalent(&implies(var("q"), var("p")))?);

    Ok(())
}

#[test]
fn test_modus_ponens() -> LogicResult<()> {
    let argument = Argument::new(vec![implies(var("a"), var("b")), var("a")], var("b"));

    assert!(argument.is_valid()?);
    assert_eq!(argument.to_string(), "a -> b, a |= b");

    Ok(())
}

#[test]
fn test_invalid_arguments() -> LogicResult<()> {
    // affirming the consequent
    let argument = Argument::new(vec![implies(var("a"), var("b")), var("b")], var("a"));
    assert!(!argument.is_valid()?);

    let argument = Argument::parse(&["p v q"], "p")?;
    assert!(!argument.is_valid()?);

    Ok(())
}

#[test]
fn test_repeated_premises() -> LogicResult<()> {
    let a = var("a");
    let argument = Argument::new(
        vec![implies(a.clone(), var("b")), a.clone(), a.clone(), a],
        var("b"),
    );

    assert!(argument.is_valid()?);

    Ok(())
}

#[test]
fn test_conjunction_folds_right() -> LogicResult<()> {
    let argument = Argument::parse(&["p", "q", "r"], "p")?;
    assert_eq!(argument.conjunction()?.to_string(), "p ^ (q ^ r)");

    let single = Argument::parse(&["p -> q"], "q")?;
    assert_eq!(single.conjunction()?.to_string(), "p -> q");

    Ok(())
}

#[test]
fn test_parsed_arguments() -> LogicResult<()> {
    // modus tollens
    assert!(Argument::parse(&["p -> q", "~q"], "~p")?.is_valid()?);
    // hypothetical syllogism
    assert!(Argument::parse(&["p -> q", "q -> r"], "p -> r")?.is_valid()?);
    // disjunctive syllogism
    assert!(Argument::parse(&["p v q", "~p"], "q")?.is_valid()?);
    // inconsistent premises entail anything
    assert!(Argument::parse(&["p", "~p"], "q")?.is_valid()?);

    Ok(())
}

#[test]
fn test_empty_argument() {
    let argument = Argument::new(vec![], var("p"));

    assert!(matches!(argument.is_valid(), Err(LogicError::EmptyArgument)));
    assert!(matches!(argument.conjunction(), Err(LogicError::EmptyArgument)));
}

fn wide_conjunction(width: usize) -> Rc<Expression> {
    (1..width).fold(var("x0"), |acc, i| and(acc, var(format!("x{i}"))))
}

#[test]
fn test_raised_ceiling() -> LogicResult<()> {
    // every answer below is settled within the first two rows
    let wide = wide_conjunction(21);
    let config = TableConfig::new(30);

    assert!(wide.is_satisfiable_with(&config)?);
    assert!(!wide.is_tautology_with(&config)?);
    assert!(!wide.is_contradiction_with(&config)?);
    assert!(!Argument::new(vec![var("x0")], wide.clone()).is_valid_with(&config)?);

    match wide.is_tautology() {
        Err(LogicError::TooManyVariables { count, limit }) => {
            assert_eq!((count, limit), (21, 20));
        }
        other => panic!("expected the default ceiling to apply, got {other:?}"),
    }

    assert!(matches!(
        Argument::new(vec![var("x0")], wide).is_valid(),
        Err(LogicError::TooManyVariables { count: 21, .. })
    ));

    Ok(())
}

#[test]
fn test_lowered_ceiling() -> LogicResult<()> {
    let e = or(var("p"), not(var("p")));

    assert!(e.is_tautology_with(&TableConfig::new(1))?);
    assert!(matches!(
        e.is_equivalent_with(&var("q"), &TableConfig::new(1)),
        Err(LogicError::TooManyVariables { count: 2, limit: 1 })
    ));

    Ok(())
}
