use std::fmt::Debug;
use std::rc::Rc;

use bit_set::BitSet;

/** Vertex Id (0-indexed) */
pub type VertexId = usize;

/** Clique, in insertion order */
pub type Clique = Vec<VertexId>;

/** models an undirected graph instance. The graph is immutable once built. */
pub trait GraphInstance: Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of (distinct) edges
    fn nb_edges(&self) -> usize;

    /** vertices w >= from adjacent to u, by increasing id */
    fn neighbors(&self, u:VertexId, from:VertexId) -> Vec<VertexId>;

    /** degree of u as counted while reading the instance */
    fn degree(&self, u:VertexId) -> usize;

    /** returns true iff u and v are adjacent (never true for u == v) */
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// iterator over the vertices
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// logs some statistics about the instance
    fn display_statistics(&self) {
        log::info!("\t{:>25}{:>10}", "nb vertices:", self.nb_vertices());
        log::info!("\t{:>25}{:>10}", "nb edges:", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|u| self.degree(u)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            log::info!("\t{:>25}{:>10}", "min degree:", min);
            log::info!("\t{:>25}{:>10}", "max degree:", max);
        }
    }
}


/** result of the clique checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid clique of the given size
    Ok(usize),
    /// vertex not in the instance
    OutOfRange(VertexId),
    /// vertex present twice
    Duplicate(VertexId),
    /// two vertices of the clique are not adjacent
    NotAdjacent(VertexId, VertexId),
}

/**
checks that a set of vertices is a clique of the instance.
returns the size of the clique if it is valid, the reason otherwise.
*/
pub fn checker(inst:Rc<dyn GraphInstance>, sol:&[VertexId]) -> CheckerResult {
    let mut visited = BitSet::new();
    for u in sol {
        if *u >= inst.nb_vertices() { return CheckerResult::OutOfRange(*u); }
        if !visited.insert(*u) { return CheckerResult::Duplicate(*u); }
    }
    for (i,u) in sol.iter().enumerate() {
        for v in &sol[i+1..] {
            if !inst.are_adjacent(*u, *v) { return CheckerResult::NotAdjacent(*u, *v); }
        }
    }
    CheckerResult::Ok(sol.len())
}
