use super::*;
use crate::error::MarqueeError;

fn docs(texts: &[&str]) -> Vec<TagDocument> {
    texts.iter().map(|t| TagDocument::from(*t)).collect()
}

#[test]
fn test_count_vectorizer_basic() {
    let corpus = docs(&["brave hero save action", "brave hero fight action"]);
    let (vocab, index) = CountVectorizer::default().fit_transform(&corpus).unwrap();

    assert_eq!(
        vocab.terms(),
        &["action", "brave", "fight", "hero", "save"]
    );
    assert_eq!(index.len(), 2);
    assert_eq!(index.dim(), 5);

    let row = index.row(0).unwrap();
    assert_eq!(row.get(vocab.get("save").unwrap()), 1);
    assert_eq!(row.get(vocab.get("fight").unwrap()), 0);
}

#[test]
fn test_counts_not_binary() {
    let corpus = docs(&["hero hero hero villain"]);
    let (vocab, index) = CountVectorizer::default().fit_transform(&corpus).unwrap();
    let row = index.row(0).unwrap();
    assert_eq!(row.get(vocab.get("hero").unwrap()), 3);
    assert_eq!(row.get(vocab.get("villain").unwrap()), 1);
    assert_eq!(vocab.frequency(vocab.get("hero").unwrap()), Some(3));
}

#[test]
fn test_stop_words_excluded() {
    let corpus = docs(&["the hero and the villain"]);
    let vocab = CountVectorizer::default().fit(&corpus).unwrap();
    assert_eq!(vocab.terms(), &["hero", "villain"]);
    assert!(vocab.get("the").is_none());
}

#[test]
fn test_max_features_keeps_most_frequent() {
    let corpus = docs(&["alpha alpha alpha beta beta gamma", "alpha beta delta"]);
    let vocab = CountVectorizer::new(2).unwrap().fit(&corpus).unwrap();
    assert_eq!(vocab.terms(), &["alpha", "beta"]);
}

#[test]
fn test_max_features_tie_break_lexicographic() {
    // every term appears once; the lexicographically smallest two survive
    let corpus = docs(&["zeta mu alpha omega"]);
    let vocab = CountVectorizer::new(2).unwrap().fit(&corpus).unwrap();
    assert_eq!(vocab.terms(), &["alpha", "mu"]);
}

#[test]
fn test_vocabulary_deterministic() {
    let corpus = docs(&[
        "space marine pandora",
        "pirate caribbean curse",
        "space station pirate",
    ]);
    let vectorizer = CountVectorizer::new(4).unwrap();
    let first = vectorizer.fit_transform(&corpus).unwrap();
    for _ in 0..5 {
        assert_eq!(vectorizer.fit_transform(&corpus).unwrap(), first);
    }
}

#[test]
fn test_zero_row_for_unmatched_document() {
    let corpus = docs(&["hero villain", "", "the and of"]);
    let (_, index) = CountVectorizer::default().fit_transform(&corpus).unwrap();
    assert_eq!(index.len(), 3);
    assert!(!index.row(0).unwrap().is_zero());
    assert!(index.row(1).unwrap().is_zero());
    assert!(index.row(2).unwrap().is_zero());
}

#[test]
fn test_empty_document_list_is_fatal() {
    let err = CountVectorizer::default().fit(&[]).unwrap_err();
    assert!(matches!(err, MarqueeError::EmptyCorpus { ref stage } if stage == "vectorize"));
}

#[test]
fn test_no_vocabulary_is_fatal() {
    let corpus = docs(&["", "the a an", "x y z"]);
    let err = CountVectorizer::default().fit(&corpus).unwrap_err();
    assert!(matches!(err, MarqueeError::EmptyCorpus { ref stage } if stage == "vocabulary"));
}

#[test]
fn test_zero_max_features_rejected() {
    assert!(matches!(
        CountVectorizer::new(0),
        Err(MarqueeError::InvalidValue { .. })
    ));
}

#[test]
fn test_transform_ignores_unknown_terms() {
    let vectorizer = CountVectorizer::default();
    let vocab = vectorizer.fit(&docs(&["hero villain"])).unwrap();
    let index = vectorizer.transform(&vocab, &docs(&["hero wizard wizard"]));
    let row = index.row(0).unwrap();
    assert_eq!(row.nnz(), 1);
    assert_eq!(row.get(vocab.get("hero").unwrap()), 1);
}

#[test]
fn test_most_frequent() {
    let corpus = docs(&["beta beta alpha gamma gamma"]);
    let vocab = CountVectorizer::default().fit(&corpus).unwrap();
    assert_eq!(
        vocab.most_frequent(2),
        vec![("beta", 2), ("gamma", 2)]
    );
}

#[test]
fn test_sparse_vector_from_counts_merges() {
    let v = SparseVector::from_counts(vec![(3, 1), (1, 2), (3, 1), (5, 0)]);
    assert_eq!(v.entries(), &[(1, 2), (3, 2)]);
}

#[test]
fn test_sparse_vector_dot_and_norm() {
    let a = SparseVector::from_counts(vec![(0, 1), (2, 2)]);
    let b = SparseVector::from_counts(vec![(2, 3), (4, 1)]);
    assert_eq!(a.dot(&b), 6.0);
    assert!((a.norm() - 5f64.sqrt()).abs() < 1e-12);
    assert_eq!(SparseVector::default().norm(), 0.0);
}
