use log::info;
use serde::Serialize;


/** new best clique found during the search */
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Improvement {
    /// size of the new best clique
    pub size: usize,
    /// seconds since the beginning of the search phase
    pub time: f64,
}

/** statistics of a branch & bound run */
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// nb calls to explore
    pub nb_explored: u64,
    /// nb nodes cut by the coloring bound
    pub nb_pruned: u64,
    /// nb nodes without candidates that improved the best clique
    pub nb_leaves: u64,
    /// nb seeds entirely explored
    pub nb_seeds: usize,
    /// successive best cliques (strictly increasing sizes)
    pub improvements: Vec<Improvement>,
}

impl SearchStats {

    /// sizes of the successive best cliques
    pub fn primal_list(&self) -> Vec<usize> {
        self.improvements.iter().map(|i| i.size).collect()
    }

    /// logs the statistics
    pub fn display_statistics(&self) {
        info!("\t{:>25}{:>10}", "explored nodes:", self.nb_explored);
        info!("\t{:>25}{:>10}", "pruned nodes:", self.nb_pruned);
        info!("\t{:>25}{:>10}", "improving leaves:", self.nb_leaves);
        info!("\t{:>25}{:>10}", "completed seeds:", self.nb_seeds);
    }
}
