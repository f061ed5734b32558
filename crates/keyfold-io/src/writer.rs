//! Pair-per-line writer.

use std::io::Write;

use keyfold_types::SparseVector;

/// Write each pair as two space-separated integers on its own line.
///
/// This is the inverse of one sequence of the reader's wire format, minus
/// the count prefix.
pub fn write_pairs<W: Write>(mut writer: W, vector: &SparseVector) -> std::io::Result<()> {
    for pair in vector.iter() {
        writeln!(writer, "{pair}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(pairs: &[(i64, i64)]) -> String {
        let vector: SparseVector = pairs.iter().copied().collect();
        let mut out = Vec::new();
        write_pairs(&mut out, &vector).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_pair_per_line() {
        assert_eq!(rendered(&[(1, 2), (2, 6), (3, 1)]), "1 2\n2 6\n3 1\n");
    }

    #[test]
    fn negative_components_print_signed() {
        assert_eq!(rendered(&[(-4, -7)]), "-4 -7\n");
    }

    #[test]
    fn empty_vector_writes_nothing() {
        assert_eq!(rendered(&[]), "");
    }
}
