use std::rc::Rc;
use std::time::Duration;

use log::info;
use serde::Serialize;

use crate::instance::{Clique, GraphInstance, VertexId};
use crate::search::budget::SearchBudget;
use crate::search::candidates::advance_into;
use crate::search::coloring_bound::GreedyColoring;
use crate::search::stats::{Improvement, SearchStats};


/** result of the exploration of a node */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreStatus {
    /// the coloring bound cannot beat the best clique
    Pruned,
    /// the subtree is entirely explored (the best clique may have improved)
    Explored,
    /// the time budget is exhausted, the whole search must stop
    Aborted,
}

/** how a search ended */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchStatus {
    /// every seed was explored: the clique is maximum
    Completed,
    /// the time budget expired: the clique is the best one found so far
    TimedOut,
}

/** best clique found by a search and how the search ended */
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// best clique found (possibly empty if the search timed out early)
    pub clique: Clique,
    /// completed or timed out
    pub status: SearchStatus,
    /// duration of the search phase
    pub elapsed: Duration,
    /// search statistics
    pub stats: SearchStats,
}


/**
Branch & bound for the maximum CLIQUE problem.
node: partial clique (vertices in insertion order) + candidates (vertices adjacent to the whole clique)
bound: size of the clique + number of colors of a greedy coloring of the candidates
decisions: add a candidate c to the clique, the new candidates are the candidates adjacent to c

The partial clique is a single buffer (push before a child, pop after it). The candidates of the
node at depth d are stored in `candidates[d]`, this buffer is reused by all the nodes at depth d.
*/
#[derive(Debug)]
pub struct CliqueBnb {
    /// instance to solve
    inst: Rc<dyn GraphInstance>,
    /// deadline of the search
    budget: SearchBudget,
    /// best clique found so far (never shrinks)
    best: Clique,
    /// vertices of the current partial clique
    clique: Clique,
    /// candidates[d]: candidates of the current node at depth d
    candidates: Vec<Vec<VertexId>>,
    /// coloring used to compute the bound
    coloring: GreedyColoring,
    /// search statistics
    stats: SearchStats,
}

impl CliqueBnb {

    /** creates a search with an empty best clique */
    pub fn new(inst:Rc<dyn GraphInstance>, budget:SearchBudget) -> Self {
        let n = inst.nb_vertices();
        Self {
            inst,
            budget,
            best: Vec::new(),
            clique: Vec::with_capacity(n),
            candidates: vec![Vec::new()],
            coloring: GreedyColoring::new(n),
            stats: SearchStats::default(),
        }
    }

    /// best clique found so far
    pub fn best(&self) -> &[VertexId] { &self.best }

    /// statistics collected so far
    pub fn stats(&self) -> &SearchStats { &self.stats }

    /** explores every clique containing the seed (and possibly other vertices anywhere in the graph) */
    pub fn explore_seed(&mut self, seed:VertexId) -> ExploreStatus {
        self.clique.clear();
        self.clique.push(seed);
        self.candidates[0] = self.inst.neighbors(seed, 0);
        let res = self.explore(0);
        if res != ExploreStatus::Aborted { self.stats.nb_seeds += 1; }
        res
    }

    /** explores the node at the given depth (`clique` and `candidates[depth]` describe it).
    The time budget is checked once per call, after the bound and before branching.
    */
    fn explore(&mut self, depth:usize) -> ExploreStatus {
        self.stats.nb_explored += 1;
        let ub = self.clique.len()
            + self.coloring.chromatic_estimate(&*self.inst, &self.candidates[depth]);
        if ub <= self.best.len() {
            self.stats.nb_pruned += 1;
            return ExploreStatus::Pruned;
        }
        if self.candidates[depth].is_empty() {
            self.record_best();
            return ExploreStatus::Explored;
        }
        if self.budget.is_exhausted() { return ExploreStatus::Aborted; }
        if self.candidates.len() == depth+1 { self.candidates.push(Vec::new()); }
        for i in 0..self.candidates[depth].len() {
            let c = self.candidates[depth][i];
            let (parents, children) = self.candidates.split_at_mut(depth+1);
            advance_into(&*self.inst, &parents[depth], c, &mut children[0]);
            self.clique.push(c);
            let res = self.explore(depth+1);
            self.clique.pop();
            if res == ExploreStatus::Aborted { return ExploreStatus::Aborted; }
        }
        ExploreStatus::Explored
    }

    /// the current clique becomes the best one
    fn record_best(&mut self) {
        debug_assert!(self.clique.len() > self.best.len());
        debug_assert!(self.clique.iter().enumerate().all(|(i,u)|
            self.clique[i+1..].iter().all(|v| self.inst.are_adjacent(*u, *v))
        ), "invalid clique {:?}", self.clique);
        self.best.clone_from(&self.clique);
        self.stats.nb_leaves += 1;
        let time = self.budget.elapsed().as_secs_f64();
        info!("new best clique: {} vertices ({:.3}s)", self.best.len(), time);
        self.stats.improvements.push(Improvement { size: self.best.len(), time });
    }

    /** ends the search */
    pub fn into_outcome(self, status:SearchStatus) -> SearchOutcome {
        SearchOutcome {
            clique: self.best,
            status,
            elapsed: self.budget.elapsed(),
            stats: self.stats,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Instant;

    use crate::dimacs::DimacsInstance;
    use crate::instance::{checker, CheckerResult};
    use crate::search::testing::random_graph;

    fn no_limit() -> SearchBudget { SearchBudget::start(Duration::from_secs(3600)) }

    #[test]
    fn test_single_seed_finds_its_largest_clique() {
        let inst = Rc::new(DimacsInstance::from_file("insts/k4_in_triangles.col").unwrap());
        let mut bnb = CliqueBnb::new(inst.clone(), no_limit());
        // vertex 1 (0-indexed 0) belongs to triangles only
        assert_eq!(bnb.explore_seed(0), ExploreStatus::Explored);
        assert_eq!(bnb.best().len(), 3);
        assert!(bnb.best().contains(&0));
        // vertex 2 (0-indexed 1) belongs to the K4
        assert_eq!(bnb.explore_seed(1), ExploreStatus::Explored);
        let mut best = bnb.best().to_vec();
        best.sort_unstable();
        assert_eq!(best, vec![1,3,5,7]);
        // no better clique around vertex 3: pruned at the root
        assert_eq!(bnb.explore_seed(2), ExploreStatus::Pruned);
        assert_eq!(bnb.stats().nb_seeds, 3);
        assert_eq!(bnb.stats().primal_list(), vec![3,4]);
    }

    #[test]
    fn test_isolated_seed() {
        let inst = Rc::new(DimacsInstance::from_file("insts/edgeless4.col").unwrap());
        let mut bnb = CliqueBnb::new(inst, no_limit());
        assert_eq!(bnb.explore_seed(2), ExploreStatus::Explored);
        assert_eq!(bnb.best(), &[2]);
        assert_eq!(bnb.explore_seed(0), ExploreStatus::Pruned);
        assert_eq!(bnb.best(), &[2]);
    }

    #[test]
    fn test_exhausted_budget_aborts() {
        let inst = Rc::new(random_graph(60, 0.8, 3));
        let past = Instant::now() - Duration::from_secs(1);
        let mut bnb = CliqueBnb::new(inst.clone(), SearchBudget::started_at(past, Duration::from_millis(1)));
        let seed = inst.vertices().max_by_key(|u| inst.degree(*u)).unwrap();
        assert_eq!(bnb.explore_seed(seed), ExploreStatus::Aborted);
        // aborted before any leaf could be reached
        assert!(bnb.best().is_empty());
        assert_eq!(bnb.stats().nb_seeds, 0);
        let outcome = bnb.into_outcome(SearchStatus::TimedOut);
        assert_eq!(outcome.status, SearchStatus::TimedOut);
        assert!(outcome.clique.is_empty());
    }

    #[test]
    fn test_buffers_do_not_leak_between_siblings() {
        // every partial result must be a clique, whatever the order of the seeds
        for seed in 0..10 {
            let inst:Rc<dyn GraphInstance> = Rc::new(random_graph(30, 0.6, seed));
            let mut bnb = CliqueBnb::new(inst.clone(), no_limit());
            for u in inst.vertices().rev() {
                assert_ne!(bnb.explore_seed(u), ExploreStatus::Aborted);
                let size = bnb.best().len();
                assert_eq!(checker(inst.clone(), bnb.best()), CheckerResult::Ok(size));
            }
        }
    }
}
