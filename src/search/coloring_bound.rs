use std::cmp::max;

use bit_set::BitSet;

use crate::instance::{GraphInstance, VertexId};


/** greedy sequential coloring of a candidate set, used as an upper bound on the
size of the cliques it contains (a clique has at most one vertex per color).

The colors are stored in a dense array indexed by vertex id. The array is reset
after each estimation so that the structure can be reused at every node.
*/
#[derive(Debug, Clone)]
pub struct GreedyColoring {
    /// color_of[v]: color of v in the current coloring (None if not colored yet)
    color_of: Vec<Option<usize>>,
    /// colors used by the colored neighbors of the vertex being colored
    forbidden: BitSet,
}

impl GreedyColoring {

    /** creates a coloring for a graph of n vertices */
    pub fn new(n:usize) -> Self {
        Self { color_of: vec![None ; n], forbidden: BitSet::default() }
    }

    /** color of a vertex in the current coloring */
    pub fn color_of(&self, v:VertexId) -> Option<usize> { self.color_of[v] }

    /** returns the number of colors used by the greedy coloring of the candidates
    (0 if there is no candidate).
    */
    pub fn chromatic_estimate(&mut self, inst:&dyn GraphInstance, candidates:&[VertexId]) -> usize {
        let res = self.assign(inst, candidates);
        self.reset(candidates);
        res
    }

    /** colors the candidates in the given order: each vertex takes the smallest color
    (starting at 1) not used by its already colored neighbors.
    Returns the largest color used. Colors stay assigned until `reset` is called.
    */
    fn assign(&mut self, inst:&dyn GraphInstance, candidates:&[VertexId]) -> usize {
        let mut nb_colors = 0;
        for v in candidates {
            self.forbidden.clear();
            for u in candidates {
                if let Some(c) = self.color_of[*u] {
                    if inst.are_adjacent(*u, *v) { self.forbidden.insert(c); }
                }
            }
            let mut color = 1;
            while self.forbidden.contains(color) { color += 1; }
            self.color_of[*v] = Some(color);
            nb_colors = max(nb_colors, color);
        }
        nb_colors
    }

    /// uncolors the candidates
    fn reset(&mut self, candidates:&[VertexId]) {
        for v in candidates { self.color_of[*v] = None; }
    }
}

/** greedy coloring bound of a candidate set (allocates its own coloring) */
pub fn chromatic_estimate(inst:&dyn GraphInstance, candidates:&[VertexId]) -> usize {
    GreedyColoring::new(inst.nb_vertices()).chromatic_estimate(inst, candidates)
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use crate::dimacs::DimacsInstance;
    use crate::search::testing::{clique_number_within, random_graph};

    #[test]
    fn test_empty_candidates() {
        let inst = DimacsInstance::from_file("insts/k5.col").unwrap();
        assert_eq!(chromatic_estimate(&inst, &[]), 0);
    }

    #[test]
    fn test_known_graphs() {
        let k5 = DimacsInstance::from_file("insts/k5.col").unwrap();
        assert_eq!(chromatic_estimate(&k5, &[0,1,2,3,4]), 5);
        assert_eq!(chromatic_estimate(&k5, &[3,1]), 2);
        let c5 = DimacsInstance::from_file("insts/c5.col").unwrap();
        assert_eq!(chromatic_estimate(&c5, &[0,1,2,3,4]), 3);
        assert_eq!(chromatic_estimate(&c5, &[0,2]), 1);
        let edgeless = DimacsInstance::from_file("insts/edgeless4.col").unwrap();
        assert_eq!(chromatic_estimate(&edgeless, &[0,1,2,3]), 1);
    }

    #[test]
    fn test_depends_on_order() {
        // path 0-1-2-3: ordering 0,3,1,2 forces a third color on 2
        let inst = DimacsInstance::from_edges(4, &[(0,1),(1,2),(2,3)]).unwrap();
        assert_eq!(chromatic_estimate(&inst, &[0,1,2,3]), 2);
        assert_eq!(chromatic_estimate(&inst, &[0,3,1,2]), 3);
    }

    #[test]
    fn test_coloring_is_proper() {
        let inst = random_graph(40, 0.5, 7);
        let candidates:Vec<VertexId> = inst.vertices().collect();
        let mut coloring = GreedyColoring::new(inst.nb_vertices());
        let nb_colors = coloring.assign(&inst, &candidates);
        for u in &candidates {
            let cu = coloring.color_of(*u).unwrap();
            assert!(cu >= 1 && cu <= nb_colors);
            for v in &candidates {
                if inst.are_adjacent(*u, *v) {
                    assert_ne!(Some(cu), coloring.color_of(*v));
                }
            }
        }
        coloring.reset(&candidates);
        assert!(candidates.iter().all(|v| coloring.color_of(*v).is_none()));
    }

    #[test]
    fn test_bound_is_sound() {
        let mut rng = StdRng::seed_from_u64(42);
        for seed in 0..20 {
            let inst = random_graph(14, 0.2 + 0.03 * seed as f64, seed);
            let mut coloring = GreedyColoring::new(inst.nb_vertices());
            for _ in 0..20 {
                let mut candidates:Vec<VertexId> = inst.vertices().collect();
                candidates.shuffle(&mut rng);
                let size = rng.gen_range(0..=candidates.len());
                candidates.truncate(size);
                let omega = clique_number_within(&inst, &candidates);
                assert!(coloring.chromatic_estimate(&inst, &candidates) >= omega);
            }
        }
    }
}
