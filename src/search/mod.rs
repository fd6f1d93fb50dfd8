//! Branch & bound for the maximum clique problem.

/// advances the candidate set of a partial clique
pub mod candidates;

/// greedy coloring upper bound
pub mod coloring_bound;

/// time budget and search deadline
pub mod budget;

/// search statistics
pub mod stats;

/// recursive branch & bound
pub mod clique_bnb;

/// runs the branch & bound from every vertex, by decreasing degree
pub mod seeds;

#[cfg(test)]
pub(crate) mod testing;
