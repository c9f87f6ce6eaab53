//! Performance benchmarks for the analysis primitives and batch facade
//!
//! Run with: cargo bench --bench pipeline_benchmarks

use chatsense::classification::MessageInput;
use chatsense::entity_extraction::{EntityExtractor, PatternEntityExtractor};
use chatsense::intent::IntentClassifier;
use chatsense::prelude::*;
use chatsense::sentiment::SentimentScorer;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SHORT: &str = "Foi um excelente atendimento, gostei muito";
const CONTACT: &str =
    "Contato: joao@exemplo.com ou (11) 98888-7777, site https://exemplo.com, em 01/12/2024";

fn long_message() -> String {
    [SHORT, CONTACT, "Isso é um problema terrível, quero cancelar"].repeat(20).join(" ")
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");
    let scorer = SentimentScorer::new();
    let classifier = IntentClassifier::new();
    let extractor = PatternEntityExtractor::new();
    let long = long_message();

    group.bench_function("sentiment_short", |b| {
        b.iter(|| scorer.analyze(black_box(SHORT)))
    });
    group.bench_function("sentiment_long", |b| {
        b.iter(|| scorer.analyze(black_box(&long)))
    });
    group.bench_function("intent_short", |b| {
        b.iter(|| classifier.classify(black_box(SHORT)))
    });
    group.bench_function("entities_contact", |b| {
        b.iter(|| extractor.extract_entities(black_box(CONTACT)))
    });
    group.bench_function("entities_long", |b| {
        b.iter(|| extractor.extract_entities(black_box(&long)))
    });

    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batches");
    let rt = tokio::runtime::Runtime::new().unwrap();
    let analyzer = MessageAnalyzer::new();

    for size in [1usize, 10, 100] {
        let messages: Vec<MessageInput> = (0..size)
            .map(|i| MessageInput::new(i.to_string(), CONTACT))
            .collect();
        let texts: Vec<&str> = vec![SHORT; size];

        group.bench_with_input(
            BenchmarkId::new("classify_multiple_messages", size),
            &messages,
            |b, messages| {
                b.to_async(&rt)
                    .iter(|| async { analyzer.classify_multiple_messages(messages).await })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("average_sentiment", size),
            &texts,
            |b, texts| b.to_async(&rt).iter(|| async { analyzer.average_sentiment(texts).await }),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_batches);
criterion_main!(benches);
