//! helpers shared by the search tests

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::dimacs::DimacsInstance;
use crate::instance::{GraphInstance, VertexId};

/** G(n,p) random graph */
pub fn random_graph(n:usize, p:f64, seed:u64) -> DimacsInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u+1..n {
            if rng.gen_bool(p) { edges.push((u,v)); }
        }
    }
    DimacsInstance::from_edges(n, &edges).unwrap()
}

/** size of the largest clique contained in `vertices` (brute force, at most 20 vertices) */
pub fn clique_number_within(inst:&dyn GraphInstance, vertices:&[VertexId]) -> usize {
    assert!(vertices.len() <= 20, "brute force limited to 20 vertices");
    let k = vertices.len();
    let mut best = 0;
    for mask in 0u32..(1 << k) {
        let size = mask.count_ones() as usize;
        if size <= best { continue; }
        let chosen:Vec<VertexId> = (0..k).filter(|i| mask & (1 << i) != 0).map(|i| vertices[i]).collect();
        let is_clique = chosen.iter().enumerate()
            .all(|(i,u)| chosen[i+1..].iter().all(|v| inst.are_adjacent(*u, *v)));
        if is_clique { best = size; }
    }
    best
}

/** clique number of the whole graph (brute force) */
pub fn clique_number(inst:&dyn GraphInstance) -> usize {
    let vertices:Vec<VertexId> = inst.vertices().collect();
    clique_number_within(inst, &vertices)
}
