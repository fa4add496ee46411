/// Rebuilds the source-to-target path from a predecessor map.
///
/// Walks `predecessors` back from `target` until it reaches `source`, then
/// reverses the walk. Returns `[source]` when `target == source` and an
/// empty path when `target` was never reached.
pub fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    if target >= predecessors.len() {
        return Vec::new();
    }
    if target == source {
        return vec![source];
    }

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors.get(current).copied().flatten() {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => break,
        }

        if path.len() > predecessors.len() {
            log::warn!("cycle in predecessor chain while rebuilding path to {}", target);
            return Vec::new();
        }
    }

    if current != source {
        // An unvisited target stops here with path == [target]; anything
        // longer is a chain that never reached the source.
        if path.len() > 1 {
            log::warn!("predecessor chain for {} ends at {} instead of source {}", target, current, source);
        }
        return Vec::new();
    }

    path.reverse();
    path
}
