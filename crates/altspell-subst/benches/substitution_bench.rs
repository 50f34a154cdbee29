// Criterion benchmarks for altspell-subst.
//
// Uses the bundled German dictionary at ../../resources/dicts/de.txt
// relative to the crate root.
//
// Run:
//   cargo bench -p altspell-subst

use criterion::{Criterion, criterion_group, criterion_main};

use altspell_core::lookup::Dictionary;
use altspell_core::mapping::LanguageMapping;
use altspell_subst::{Policy, Substituter, TransliterationTable, backward, forward};

const GERMAN_WORDS: &str = include_str!("../../../resources/dicts/de.txt");

const PARAGRAPH: &str = "Ueberhaupt braeuchte es mal einen Teststring. \
    Saetze ohne Bedeutung, aber mit vielen Umlauten. \
    DRPFA-Angehoerige gehoeren haeufig nicht dazu. \
    Bindestrich-Woerter spraechen Baende ueber Fehler. \
    Doppelgaenger-Doppelgaenger sind doppelt droelfzig. \
    Oder Uemlaeuten? Auslaeuten? Leute gaebe es, wuerde man meinen. \
    Busse muesste geloest werden, bevor Gruesse zum Gruss kommen. \
    Hierfuer ist fuer den droegen Poebel zu beachten, dass Anmassungen \
    zu Gehoerverlust fuehren koennen. Stroemelschnoesseldaemel!";

fn german() -> LanguageMapping {
    [('\u{00E4}', "ae"), ('\u{00F6}', "oe"), ('\u{00FC}', "ue"), ('\u{00DF}', "ss")]
        .into_iter()
        .map(|(native, alternative)| (native, alternative.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Dictionary-validated forward substitution of one paragraph, building the
/// substituter on every call.
fn bench_forward_dictionary(c: &mut Criterion) {
    let mapping = german();
    let words = Dictionary::from_lines(GERMAN_WORDS).retain_native(&mapping);

    c.bench_function("forward_dictionary_paragraph", |b| {
        b.iter(|| {
            std::hint::black_box(forward(
                std::hint::black_box(PARAGRAPH),
                &mapping,
                Policy::dictionary(&words),
            ))
        });
    });
}

/// Same paragraph with a prebuilt substituter, isolating per-word work.
fn bench_forward_prebuilt(c: &mut Criterion) {
    let mapping = german();
    let words = Dictionary::from_lines(GERMAN_WORDS).retain_native(&mapping);
    let substituter = Substituter::new(&mapping, Policy::dictionary(&words));

    c.bench_function("forward_prebuilt_paragraph", |b| {
        b.iter(|| std::hint::black_box(substituter.apply(std::hint::black_box(PARAGRAPH))));
    });
}

/// Forced substitution of a word with many occurrences.
fn bench_forward_force(c: &mut Criterion) {
    let mapping = german();

    c.bench_function("forward_force_long_word", |b| {
        b.iter(|| {
            std::hint::black_box(forward(
                std::hint::black_box("Stroemelschnoesseldaemelueberaeoe"),
                &mapping,
                Policy::Force,
            ))
        });
    });
}

/// Reverse transliteration, with and without a prebuilt table.
fn bench_backward(c: &mut Criterion) {
    let mapping = german();
    let words = Dictionary::from_lines(GERMAN_WORDS);
    let native = forward(PARAGRAPH, &mapping, Policy::dictionary(&words));
    let table = TransliterationTable::new(&mapping);

    c.bench_function("backward_paragraph", |b| {
        b.iter(|| std::hint::black_box(backward(std::hint::black_box(&native), &mapping)));
    });
    c.bench_function("backward_prebuilt_paragraph", |b| {
        b.iter(|| std::hint::black_box(table.apply(std::hint::black_box(&native))));
    });
}

criterion_group!(
    benches,
    bench_forward_dictionary,
    bench_forward_prebuilt,
    bench_forward_force,
    bench_backward,
);
criterion_main!(benches);
