use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use rpn_calculator::interpreter::{convert, postfix_to_string, solve};

/// Evaluates an infix arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate, e.g. "(3.5+2)*-4"
    #[clap(allow_hyphen_values = true)]
    expression: String,

    /// Print the expression in postfix notation instead of evaluating it
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if args.postfix {
        let tokens = convert(&args.expression)
            .with_context(|| format!("could not convert '{}'", args.expression))?;
        println!("{}", postfix_to_string(&tokens)?);
        return Ok(());
    }

    info!("Evaluating {}", args.expression);
    let result = solve(&args.expression)
        .with_context(|| format!("could not evaluate '{}'", args.expression))?;
    println!("{}", result);
    Ok(())
}
