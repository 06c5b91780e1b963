use super::*;
use crate::tags::TagDocument;
use crate::vectorize::CountVectorizer;

fn vector(counts: &[(usize, u32)]) -> SparseVector {
    SparseVector::from_counts(counts.iter().copied())
}

fn index_of(texts: &[&str]) -> VectorIndex {
    let docs: Vec<TagDocument> = texts.iter().map(|t| TagDocument::from(*t)).collect();
    CountVectorizer::default().fit_transform(&docs).unwrap().1
}

#[test]
fn test_cosine_identical() {
    let a = vector(&[(0, 1), (1, 2)]);
    assert!((cosine(&a, &a) - 1.0).abs() < 1e-12);
}

#[test]
fn test_cosine_orthogonal() {
    let a = vector(&[(0, 1)]);
    let b = vector(&[(1, 1)]);
    assert_eq!(cosine(&a, &b), 0.0);
}

#[test]
fn test_cosine_partial_overlap() {
    // [1,1,1,0] vs [1,1,0,1] -> 2 / (sqrt3 * sqrt3)
    let a = vector(&[(0, 1), (1, 1), (2, 1)]);
    let b = vector(&[(0, 1), (1, 1), (3, 1)]);
    assert!((cosine(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_cosine_zero_vector() {
    let a = vector(&[(0, 3)]);
    let zero = SparseVector::default();
    assert_eq!(cosine(&a, &zero), 0.0);
    assert_eq!(cosine(&zero, &a), 0.0);
    assert_eq!(cosine(&zero, &zero), 0.0);
}

#[test]
fn test_matrix_symmetric() {
    let index = index_of(&[
        "space marine pandora tree",
        "pirate caribbean curse ship",
        "space ship pirate",
        "pandora tree forest",
    ]);
    let matrix = SimilarityMatrix::compute(&index);
    assert_eq!(matrix.len(), 4);
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
        }
    }
}

#[test]
fn test_matrix_diagonal() {
    let index = index_of(&["hero villain", "", "hero sidekick sidekick"]);
    let matrix = SimilarityMatrix::compute(&index);
    assert_eq!(matrix.get(0, 0), 1.0);
    assert_eq!(matrix.get(1, 1), 0.0);
    assert_eq!(matrix.get(2, 2), 1.0);
}

#[test]
fn test_matrix_zero_row_similarity() {
    let index = index_of(&["hero villain", "the and", "hero"]);
    let matrix = SimilarityMatrix::compute(&index);
    assert_eq!(matrix.get(0, 1), 0.0);
    assert_eq!(matrix.get(1, 2), 0.0);
    assert!(matrix.get(0, 2) > 0.0);
}

#[test]
fn test_matrix_matches_pairwise_cosine() {
    let index = index_of(&[
        "brave hero save action",
        "brave hero fight action",
        "love stori unfold romanc",
    ]);
    let matrix = SimilarityMatrix::compute(&index);
    for i in 0..3 {
        for j in 0..3 {
            if i == j {
                continue;
            }
            let expected = cosine(index.row(i).unwrap(), index.row(j).unwrap());
            assert!((matrix.get(i, j) - expected).abs() < 1e-12);
        }
    }
    assert!((matrix.get(0, 1) - 0.75).abs() < 1e-12);
    assert_eq!(matrix.get(0, 2), 0.0);
}

#[test]
fn test_matrix_values_in_unit_range() {
    let index = index_of(&["hero hero hero", "hero", "hero villain", "villain"]);
    let matrix = SimilarityMatrix::compute(&index);
    for i in 0..matrix.len() {
        for value in matrix.row(i) {
            assert!((0.0..=1.0).contains(&value));
        }
    }
    assert_eq!(matrix.get(0, 1), 1.0);
}

#[test]
fn test_row_matches_get() {
    let index = index_of(&["alpha beta", "beta gamma", "gamma delta"]);
    let matrix = SimilarityMatrix::compute(&index);
    let row: Vec<f64> = matrix.row(1).collect();
    assert_eq!(row.len(), 3);
    for (j, value) in row.iter().enumerate() {
        assert_eq!(*value, matrix.get(1, j));
    }
}

#[test]
fn test_empty_index() {
    let matrix = SimilarityMatrix::compute(&VectorIndex::default());
    assert!(matrix.is_empty());
    assert_eq!(matrix.row(0).count(), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_get_out_of_range_panics() {
    let index = index_of(&["alpha beta"]);
    SimilarityMatrix::compute(&index).get(0, 1);
}

#[test]
fn test_matrix_uses_same_formula_as_cosine() {
    let index = index_of(&[
        "hero hero villain",
        "villain sidekick hero",
        "sidekick",
        "galaxy quest hero",
    ]);
    let matrix = SimilarityMatrix::compute(&index);
    for i in 0..index.len() {
        for j in (i + 1)..index.len() {
            let expected = cosine(index.row(i).unwrap(), index.row(j).unwrap());
            assert_eq!(matrix.get(i, j).to_bits(), expected.to_bits(), "cell ({i}, {j})");
        }
    }
}

#[test]
fn test_try_get_out_of_range() {
    let index = index_of(&["alpha beta", "beta gamma"]);
    let matrix = SimilarityMatrix::compute(&index);
    assert_eq!(matrix.try_get(0, 0), Some(1.0));
    assert_eq!(matrix.try_get(1, 0), matrix.try_get(0, 1));
    assert_eq!(matrix.try_get(0, 2), None);
    assert_eq!(matrix.try_get(2, 0), None);
    assert!(matrix.try_row(2).is_none());
    assert_eq!(matrix.try_row(1).map(|r| r.count()), Some(2));
}

#[test]
fn test_try_get_empty_matrix() {
    let matrix = SimilarityMatrix::compute(&VectorIndex::default());
    assert_eq!(matrix.try_get(0, 0), None);
}
