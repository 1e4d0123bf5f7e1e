#![no_main]

use core::fmt;
use std::sync::Arc;

use chroma_core::log::LogParams;
use chroma_core::{
    ExponentOp, Interpolation, LogOp, Lut1D, Lut1DOp, MatrixOffsetOp, Op, Operation,
    TransformDirection, serialize_ops,
};
use chroma_opt::{NullDiagnostics, Optimizer, Termination};
use libfuzzer_sys::{arbitrary, fuzz_target};

/// A small parameter space, so that inverses and no-ops actually show up.
struct ArbitraryOp(Operation);

impl fmt::Debug for ArbitraryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#""{}""#, self.0)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for ArbitraryOp {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let raw = u8::arbitrary(u)?;
        let direction =
            if raw & 1 == 0 { TransformDirection::Forward } else { TransformDirection::Inverse };
        let param = f32::from((raw >> 1) & 0b11) * 0.5 + 0.5;

        let op = match (raw >> 3) % 4 {
            0 => ExponentOp::new([param; 4], direction).map(Operation::from),
            1 => LogOp::new(
                LogParams { k: [1.0; 3], m: [param; 3], b: [0.0; 3], base: [10.0; 3], kb: [0.0; 3] },
                direction,
            )
            .map(Operation::from),
            2 => MatrixOffsetOp::scale([param; 4], direction).map(Operation::from),
            _ => Lut1D::new([0.0; 3], [param; 3], [vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0]])
                .map(|lut| Lut1DOp::new(Arc::new(lut), Interpolation::Linear, direction).into()),
        };

        op.map(Self).map_err(|_| arbitrary::Error::IncorrectFormat)
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        u8::size_hint(depth)
    }
}

fuzz_target!(|data: Vec<ArbitraryOp>| {
    let mut ops: Vec<Operation> = data.into_iter().map(|it| it.0).collect();
    let original_len = ops.len();

    let optimizer = Optimizer::optimized();
    let summary = optimizer.run(&mut ops, &NullDiagnostics);

    assert!(ops.len() <= original_len);
    assert_eq!(ops.len(), summary.final_len);
    assert_eq!(summary.termination, Termination::Converged);
    assert!(ops.iter().all(|it| !it.is_no_op()));
    assert!(ops.windows(2).all(|it| !(it[0].is_same_type(&it[1]) && it[0].is_inverse(&it[1]))));

    let before = serialize_ops(&ops, 0).to_string();
    let again = optimizer.run(&mut ops, &NullDiagnostics);

    assert_eq!(again.passes, usize::from(!ops.is_empty()));
    assert_eq!(serialize_ops(&ops, 0).to_string(), before);
});
