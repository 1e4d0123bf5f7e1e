use chroma_core::Op;

/// Removes adjacent pairs of ops that cancel out, returning how many pairs were removed.
///
/// Inverses tend to nest (`A, B, B', A'`), so after removing a pair the scan steps back by one
/// to check whether the ops on either side of it now cancel too:
///
/// ```text
///          |
/// ..., A, B, B', A', ...   remove (B, B')
///       |
/// ..., A, A', ...          step back, remove (A, A')
/// ```
///
/// Every comparison either advances the scan or shrinks the list,
/// so this makes at most `ops.len() - 1` comparisons.
pub fn run<T: Op>(ops: &mut Vec<T>) -> usize {
    let mut count = 0;
    let mut idx = 0;

    while idx + 1 < ops.len() {
        let first = &ops[idx];
        let second = &ops[idx + 1];

        if first.is_same_type(second) && first.is_inverse(second) {
            ops.drain(idx..idx + 2);
            count += 1;

            idx = idx.saturating_sub(1);
        } else {
            idx += 1;
        }
    }

    count
}
