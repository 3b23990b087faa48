use verbform::{MorphologyIndex, Person, Tense};

fn main() {
    let index = MorphologyIndex::new();
    let words = std::env::args().skip(1).collect::<Vec<_>>();
    let words = if words.is_empty() {
        vec!["be".to_string(), "gave".to_string(), "swimming".to_string()]
    } else {
        words
    };

    println!("=== {} verbs, {} forms ===", index.len(), index.lemma_count());
    for word in &words {
        let Some(infinitive) = index.lemmatize(word) else {
            println!("{}: not in table", word);
            continue;
        };
        let tense = index.tense_of(word).map_or("?", Tense::name);
        println!("{} ({} of {})", word, tense, infinitive);
        for tense in Tense::ALL {
            let form = index.conjugate(word, tense, false).unwrap_or("-");
            let negated = index.conjugate(word, tense, true).unwrap_or("-");
            println!("  {:<22} {:<12} {}", tense.name(), form, negated);
        }
        println!(
            "  3rd person present: {}",
            index.present(word, Some(Person::Third), false).unwrap_or("-")
        );
    }
}
