use crate::instance::{GraphInstance, VertexId};

/** candidates adjacent to the added vertex, in the order of `candidates`.
The added vertex itself is never part of the result (no self-adjacency).
*/
pub fn advance(inst:&dyn GraphInstance, candidates:&[VertexId], added:VertexId) -> Vec<VertexId> {
    let mut res = Vec::with_capacity(candidates.len());
    advance_into(inst, candidates, added, &mut res);
    res
}

/** same as `advance`, but writes the result into `res` (previous content is discarded) */
pub fn advance_into(inst:&dyn GraphInstance, candidates:&[VertexId], added:VertexId, res:&mut Vec<VertexId>) {
    res.clear();
    res.extend(candidates.iter().copied().filter(|u| inst.are_adjacent(added, *u)));
}
