use chroma_core::Op;

/// Removes every identity op, returning how many were removed.
pub fn run<T: Op>(ops: &mut Vec<T>) -> usize {
    let before = ops.len();

    ops.retain(|op| !op.is_no_op());

    before - ops.len()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::tests::Counted;

    #[test]
    fn keeps_order() {
        let comparisons = Rc::new(Cell::new(0));
        let mut ops = Counted::list('a', &[0, 0, 3, 0, 0, 1, 0, 2, 0], &comparisons);

        assert_eq!(super::run(&mut ops), 6);

        let values: Vec<_> = ops.iter().map(Counted::value).collect();
        assert_eq!(values, [3, 1, 2]);
        assert_eq!(comparisons.get(), 0);
    }

    #[test]
    fn all_no_ops() {
        let mut ops = Counted::list('a', &[0; 5], &Rc::default());

        assert_eq!(super::run(&mut ops), 5);
        assert!(ops.is_empty());
        assert_eq!(super::run(&mut ops), 0);
    }
}
