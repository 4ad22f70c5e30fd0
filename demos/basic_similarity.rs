//! Basic Similarity
//!
//! The minimal example: score a suspected copy against its original.
//!
//! ```bash
//! cargo run --example basic_similarity
//! ```

use papercheck::{preprocess::normalize, SimilarityEngine, Strategy};

fn main() {
    let original = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming.";
    let copied = "Machine learning models learn patterns from data. \
        They apply those patterns when making predictions. \
        Traditional programming works in a different way.";

    let engine = SimilarityEngine::default();

    // Raw text keeps its sentence terminals, so sentence matching applies
    let raw = engine.compute_similarity(original, copied);
    println!("raw:        {raw}");

    // Normalized text is what the command-line tool compares
    let (a, b) = (normalize(original), normalize(copied));
    let normalized = engine.compute_similarity(&a, &b);
    println!("normalized: {normalized}");

    let chars: Vec<char> = a.chars().collect();
    let strategy = engine.select_strategy(&chars, &b.chars().collect::<Vec<_>>());
    assert_eq!(strategy, Strategy::Precise);
    println!("strategy:   {strategy:?}");
}
