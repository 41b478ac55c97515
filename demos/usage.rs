use std::io;

use rstruth::expr::{and, constant, implies, not, or, var};
use rstruth::expr_io::ExpressionGraph;
use rstruth::parser::parse;
use rstruth::{Argument, TableConfig, TruthTable};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    let config = TableConfig::from_env()?;

    let exp1 = or(var("x"), or(var("y"), or(constant(true), constant(false))));
    println!("{}", TruthTable::with_config(&exp1, &config)?);
    println!("{}", exp1.is_tautology_with(&config)?);

    let a = var("a");
    let b = var("b");
    let argument = Argument::new(
        vec![implies(a.clone(), b.clone()), a.clone(), a.clone(), a],
        b,
    );
    println!("{argument}: {}", argument.is_valid_with(&config)?);
    println!();

    let nested = and(
        not(var("x")),
        and(
            or(or(var("y"), var("q")), var("z")),
            not(not(var("w"))),
        ),
    );
    println!("{}", TruthTable::with_config(&nested, &config)?);

    let parsed = parse("~(p v q) ^ q")?;
    TruthTable::with_config(&parsed, &config)?.write_csv(io::stdout())?;

    ExpressionGraph::new(&parsed).render_dot(&mut io::stdout())?;

    Ok(())
}
