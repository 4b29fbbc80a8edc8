//! Record scoring benchmarks.
//! Run with: cargo bench -p esg-analysis --bench scoring_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use esg_analysis::keywords::KeywordCatalog;
use esg_analysis::loader::RecordLoader;
use esg_analysis::pipeline::Pipeline;
use esg_analysis::scoring::EsgScoreEngine;
use esg_analysis::sentiment::VaderSentiment;
use esg_analysis::text::clean;
use esg_core::config::EsgConfig;

const KEYWORDS: &str = "\
E: [탄소, 배출, 재생에너지, emission, renewable, climate]
S: [안전, 노동, 인권, safety, labor, diversity]
G: [이사회, 지배구조, 감사, board, audit, governance]
";

const COMPANIES: [&str; 5] = ["삼성전자", "LG화학", "SK하이닉스", "현대차", "POSCO"];

const SNIPPETS: [&str; 6] = [
    "Samsung announces renewable energy transition and 탄소 감축 목표",
    "노동 안전 사고 발생, board faces criticism over safety failures",
    "이사회 지배구조 개선 발표 with strong audit committee",
    "혁신 선도 기업 세계적 친환경 경영 선언",
    "climate disclosure improved, 배출량 검증 완료",
    "quarterly earnings report, no major news",
];

fn news_csv(rows: usize) -> String {
    let mut csv = String::from("company,date,title,content,source\n");
    for i in 0..rows {
        csv.push_str(&format!(
            "{},2024-{:02}-{:02},뉴스 {i},\"{}\",{}\n",
            COMPANIES[i % COMPANIES.len()],
            i % 12 + 1,
            i % 28 + 1,
            SNIPPETS[i % SNIPPETS.len()],
            if i % 3 == 0 { "DART" } else { "Reuters" },
        ));
    }
    csv
}

fn score_single_record(c: &mut Criterion) {
    let catalog = KeywordCatalog::from_yaml(KEYWORDS).unwrap();
    let sentiment = VaderSentiment::new();
    let engine = EsgScoreEngine::new(&catalog, &sentiment);
    let text = clean(SNIPPETS[1]);

    c.bench_function("score_record", |b| {
        b.iter(|| engine.score(&text, "Reuters"));
    });
}

fn run_pipeline(c: &mut Criterion) {
    let catalog = KeywordCatalog::from_yaml(KEYWORDS).unwrap();
    let sentiment = VaderSentiment::new();
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    for size in [1_000, 10_000] {
        let csv = news_csv(size);
        for (label, parallel) in [("parallel", true), ("sequential", false)] {
            let mut config = EsgConfig::default();
            config.pipeline.parallel = Some(parallel);
            let pipeline = Pipeline::new(&config, &catalog, &sentiment).unwrap();
            group.bench_with_input(BenchmarkId::new(label, size), &csv, |b, csv| {
                b.iter(|| {
                    let loaded = RecordLoader::default().load_reader(csv.as_bytes(), "<bench>").unwrap();
                    pipeline.run_records(loaded)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, score_single_record, run_pipeline);
criterion_main!(benches);
