use std::env;
use std::process;

use clap::{App, load_yaml};
use env_logger::Env;

use anytime_clique::error::Error;
use anytime_clique::search::clique_bnb::SearchStatus;
use anytime_clique::search::seeds::max_clique;
use anytime_clique::util::{export_results, outcome_line, parse_args, read_params};


/** reads the instance and the time limit, runs the branch & bound, prints the result line.
returns the status of the search.
*/
fn run() -> Result<SearchStatus, Error> {
    let yaml = load_yaml!("clique_bnb.yml");
    let main_args = parse_args(App::from_yaml(yaml), env::args_os())?;
    let (
        inst_filename,
        instance,
        t,
        sol_file,
        perf_file
    ) = read_params(&main_args)?;

    // solve it
    let outcome = max_clique(instance.clone(), t.duration());
    println!("{}", outcome_line(&outcome, t));

    // export results
    export_results(&inst_filename, instance, &outcome, perf_file, sol_file)?;
    Ok(outcome.status)
}

/** solves a maximum CLIQUE instance within a time limit.
exit status: 0 if the search completed, 1 if it timed out or on any error.
*/
pub fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    match run() {
        Ok(SearchStatus::Completed) => {},
        Ok(SearchStatus::TimedOut) => process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
