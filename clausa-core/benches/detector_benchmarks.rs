//! Performance benchmarks for clause detection
//!
//! Run with: cargo bench --bench detector_benchmarks

use clausa_core::{analyze, detect_clauses, get_profile, DependencyTree, Token};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Chain `clauses` coordinated "X said that Y was late" units under one root
fn generate_tree(clauses: usize) -> DependencyTree {
    let mut tokens = Vec::new();
    let mut push = |text: &str, pos: &str, dep: &str, head: usize| {
        let position = tokens.len();
        tokens.push(Token::new(position, text, pos, dep, head));
    };

    // unit layout: [cc] subj said that subj was late ,
    for unit in 0..clauses {
        let start = if unit == 0 { 0 } else { 7 + (unit - 1) * 8 };
        let said = if unit == 0 { 1 } else { start + 2 };
        let was = said + 3;
        if unit > 0 {
            push("and", "CCONJ", "cc", 1);
        }
        push("she", "PRON", "nsubj", said);
        if unit == 0 {
            push("said", "VERB", "ROOT", said);
        } else {
            push("said", "VERB", "conj", 1);
        }
        push("that", "SCONJ", "mark", was);
        push("he", "PRON", "nsubj", was);
        push("was", "AUX", "ccomp", said);
        push("late", "ADJ", "acomp", was);
        push(",", "PUNCT", "punct", said);
    }

    DependencyTree::from_tokens(tokens).expect("generated tree is valid")
}

fn bench_sentence_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentence_lengths");
    let profile = get_profile("en").unwrap();

    for clauses in [1, 4, 16, 64] {
        let tree = generate_tree(clauses);

        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_with_input(BenchmarkId::new("detect", clauses), &tree, |b, tree| {
            b.iter(|| detect_clauses(black_box(tree), &profile));
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let profile = get_profile("en").unwrap();
    let tree = generate_tree(8);

    c.bench_function("analyze_8_units", |b| {
        b.iter(|| analyze(black_box(&tree), &profile));
    });
}

criterion_group!(benches, bench_sentence_lengths, bench_analyze);
criterion_main!(benches);
