use std::cmp::Reverse;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, info};

use crate::instance::{GraphInstance, VertexId};
use crate::search::budget::SearchBudget;
use crate::search::clique_bnb::{CliqueBnb, ExploreStatus, SearchOutcome, SearchStatus};


/** vertices by decreasing degree (ties: smallest id first) */
pub fn seed_order(inst:&dyn GraphInstance) -> Vec<VertexId> {
    let mut res:Vec<VertexId> = inst.vertices().collect();
    res.sort_by_key(|u| Reverse(inst.degree(*u))); // stable
    res
}

/**
finds a maximum clique within the time limit.
Every vertex is used once as a seed (by decreasing degree). The clock starts once the seed order
is computed. If the time limit is reached, returns the best clique found so far.
*/
pub fn max_clique(inst:Rc<dyn GraphInstance>, time_limit:Duration) -> SearchOutcome {
    let order = seed_order(&*inst);
    let budget = SearchBudget::start(time_limit);
    let mut bnb = CliqueBnb::new(inst, budget);
    let mut status = SearchStatus::Completed;
    for (i,seed) in order.iter().enumerate() {
        debug!("seed {} / {} (vertex {}, best: {})", i+1, order.len(), seed+1, bnb.best().len());
        if bnb.explore_seed(*seed) == ExploreStatus::Aborted {
            status = SearchStatus::TimedOut;
            break;
        }
    }
    let outcome = bnb.into_outcome(status);
    info!("search {:?} in {:.3}s: clique of size {}",
        outcome.status, outcome.elapsed.as_secs_f64(), outcome.clique.len()
    );
    outcome.stats.display_statistics();
    outcome
}
