use std::ffi::OsString;
use std::fs;
use std::rc::Rc;

use clap::{App, ArgMatches, ErrorKind};
use log::{info, warn};
use serde_json::json;

use crate::{
    dimacs::DimacsInstance,
    error::{ConfigError, Error},
    instance::{GraphInstance, VertexId, CheckerResult, checker},
    search::budget::TimeBudget,
    search::clique_bnb::{SearchOutcome, SearchStatus},
};

/** parses the command line. Help and version requests print and exit the process,
any other problem is a configuration error.
*/
pub fn parse_args<'a, I, T>(app:App<'a,'a>, args:I) -> Result<ArgMatches<'a>, ConfigError>
where I: IntoIterator<Item=T>, T: Into<OsString> + Clone {
    app.get_matches_from_safe(args).or_else(|e| match e.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
        _ => Err(ConfigError::Arguments(e.message)),
    })
}

/** reads command line input and returns the instance name, instance, time budget, solution_filename, stats_filename */
pub fn read_params(main_args:&ArgMatches) -> Result<(String, Rc<dyn GraphInstance>, TimeBudget, Option<String>, Option<String>), Error> {
    let missing = |name:&str| ConfigError::Arguments(format!("missing argument <{}>", name));
    let inst_filename = main_args.value_of("instance").ok_or_else(|| missing("instance"))?;
    let t = TimeBudget::parse(main_args.value_of("time").ok_or_else(|| missing("time"))?)?;
    // read value of the solution filename
    let sol_file:Option<String> = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file:Option<String> = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    info!("reading instance: {}...", inst_filename);
    let instance:Rc<dyn GraphInstance> = Rc::new(DimacsInstance::from_file(inst_filename)?);
    instance.display_statistics();
    info!("time limit: {}", t.seconds());
    Ok((inst_filename.to_string(), instance, t, sol_file, perf_file))
}

/** result line: `<seconds> <clique size> <vertices (1-indexed)>` */
pub fn result_line(seconds:f64, clique:&[VertexId]) -> String {
    let mut res = format!("{} {}", seconds, clique.len());
    for v in clique {
        res += format!(" {}", v+1).as_str();
    }
    res
}

/** result line of a search. If the search timed out, the configured time budget is reported
instead of the measured time.
*/
pub fn outcome_line(outcome:&SearchOutcome, t:TimeBudget) -> String {
    let seconds = match outcome.status {
        SearchStatus::Completed => outcome.elapsed.as_secs_f64(),
        SearchStatus::TimedOut => t.seconds(),
    };
    result_line(seconds, &outcome.clique)
}

/** writes a string encoding the clique (1-indexed vertices on one line) */
pub fn clique_to_string(clique:&[VertexId]) -> String {
    let vertices:Vec<String> = clique.iter().map(|v| (v+1).to_string()).collect();
    vertices.join(" ") + "\n"
}

/// exports search results to files
pub fn export_results(
    inst_filename:&str,
    instance:Rc<dyn GraphInstance>,
    outcome:&SearchOutcome,
    perf_file:Option<String>,
    sol_file:Option<String>,
) -> Result<(), Error> {
    // export statistics
    if let Some(filename) = perf_file {
        let stats = json!({
            "inst_name": inst_filename,
            "time_searched": outcome.elapsed.as_secs_f64(),
            "primal_list": outcome.stats.primal_list(),
            "status": outcome.status,
            "stats": outcome.stats,
        });
        fs::write(&filename, serde_json::to_string(&stats)?)
            .map_err(|source| Error::Export { path: filename.clone(), source })?;
    }
    // export solution
    if let Some(filename) = sol_file {
        match checker(instance, &outcome.clique) {
            CheckerResult::Ok(_) => {},
            reason => { warn!("invalid solution (reason: {:?})", reason) }
        };
        fs::write(&filename, clique_to_string(&outcome.clique))
            .map_err(|source| Error::Export { path: filename.clone(), source })?;
    }
    Ok(())
}
