//! Classification benchmarks
//!
//! Run with: cargo bench --package molscan-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use molscan_core::MolecularClassifier;

const PLAIN_SAMPLE: &str = "The binding pocket analysis suggests that the ligand \
orientation depends on solvent accessibility and the local electrostatic \
environment rather than on any single residue contact.";

const MIXED_SAMPLE: &str = "The structure 1UBQ contains the ubiquitin sequence \
MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG \
(UniProt P0CG48). Aspirin, CC(=O)OC1=CC=CC=C1C(=O)O, is C9H8O4; compare with \
4INS and the promoter fragment ATCGATTGCAUCGAU.";

fn bench_classify(c: &mut Criterion) {
    let classifier = MolecularClassifier::new().unwrap();

    let mut group = c.benchmark_group("classify");
    group.bench_function("plain_text", |b| {
        b.iter(|| classifier.classify(black_box(PLAIN_SAMPLE)))
    });
    group.bench_function("mixed_molecular", |b| {
        b.iter(|| classifier.classify(black_box(MIXED_SAMPLE)))
    });
    group.bench_function("long_message", |b| {
        let long = MIXED_SAMPLE.repeat(50);
        b.iter(|| classifier.classify(black_box(&long)))
    });
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
