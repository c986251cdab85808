use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polysyl_rs::{
    aggregate, build_graph, AnalysisConfig, Analyzer, CmuDict, DictSyllableSegmenter,
    LanguageResources, ThaiTokenizer, Trie,
};

const ENGLISH: &str = "Sustainability requires responsibility. The municipality \
    reported an improvement in sustainability and accountability, but the \
    responsibility for biodiversity remains a difficult problem.";

const THAI: &str = "การพัฒนาอย่างยั่งยืนของชุมชนเป็นความรับผิดชอบร่วมกัน \
    ประสิทธิภาพของการบริหารจัดการทรัพยากรดีขึ้นมาก";

fn resources() -> LanguageResources {
    let dict = CmuDict::parse(
        "sustainability S AH0 S T EY2 N AH0 B IH1 L AH0 T IY0\n\
         responsibility R IY0 S P AA2 N S AH0 B IH1 L AH0 T IY0\n\
         municipality M Y UW0 N IH2 S AH0 P AE1 L AH0 T IY0\n\
         accountability AH0 K AW2 N T AH0 B IH1 L AH0 T IY0\n\
         biodiversity B AY2 OW0 D AY0 V ER1 S IH0 T IY0\n",
    );
    let words: Trie = [
        "การพัฒนา", "อย่าง", "ยั่งยืน", "ของ", "ชุมชน", "เป็น", "ความรับผิดชอบ", "ร่วมกัน",
        "ประสิทธิภาพ", "การบริหารจัดการ", "ทรัพยากร", "ดีขึ้น", "มาก",
    ]
    .into_iter()
    .collect();
    let syllables: Trie = [
        "การ", "พัฒ", "นา", "อย่าง", "ยั่ง", "ยืน", "ของ", "ชุม", "ชน", "เป็น", "ความ", "รับ", "ผิด",
        "ชอบ", "ร่วม", "กัน", "ประ", "สิทธิ", "ภาพ", "บริ", "หาร", "จัด", "ทรัพ", "ยา", "กร", "ดี",
        "ขึ้น", "มาก",
    ]
    .into_iter()
    .collect();

    LanguageResources::builtin()
        .with_pronouncing(dict)
        .with_thai_tokenizer(ThaiTokenizer::new(words))
        .with_segmenter(DictSyllableSegmenter::new(syllables))
}

fn bench_pipeline(c: &mut Criterion) {
    let analyzer = Analyzer::new(Arc::new(resources()), AnalysisConfig::default());
    let english = ENGLISH.repeat(20);
    let thai = THAI.repeat(20);

    c.bench_function("analyze_english", |b| {
        b.iter(|| analyzer.analyze("en", black_box(&english)))
    });

    c.bench_function("analyze_thai", |b| {
        b.iter(|| analyzer.analyze("th", black_box(&thai)))
    });
}

fn bench_graph(c: &mut Criterion) {
    let terms: Vec<String> = (0..2000).map(|i| format!("term{}", i % 97)).collect();

    c.bench_function("aggregate_2000", |b| b.iter(|| aggregate(black_box(&terms))));
    c.bench_function("build_graph_2000", |b| {
        b.iter(|| build_graph(black_box(&terms), 15))
    });
}

criterion_group!(benches, bench_pipeline, bench_graph);
criterion_main!(benches);
