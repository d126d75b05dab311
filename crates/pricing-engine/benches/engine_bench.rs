//! 定价引擎性能基准测试
//!
//! 覆盖单条件评估、动作应用和不同规模规则集的整体报价计算。

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricing_engine::{
    Action, ActionApplicator, ActionKind, AnswerSet, Condition, ConditionEvaluator, Operator,
    PricingEngine, Rule,
};
use serde_json::json;
use std::hint::black_box;

fn sample_answers() -> AnswerSet {
    AnswerSet::from_value(json!({
        "companySize": 100,
        "extraService": true,
        "features": ["extraService", "rush", "warranty"],
        "postcode": "SW1A 1AA"
    }))
}

/// 构造 n 条规则的规则集，约半数命中
fn build_rule_set(count: usize) -> Vec<Rule> {
    (0..count)
        .map(|i| {
            let threshold = if i % 2 == 0 { 50 } else { 500 };
            Rule::new(
                format!("rule_{}", i),
                vec![Condition::new(
                    "companySize",
                    Operator::GreaterThan,
                    threshold,
                )],
                vec![
                    Action::new(ActionKind::Percent, 5.0),
                    Action::new(ActionKind::Add, 10.0),
                ],
            )
        })
        .collect()
}

fn bench_condition_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition_evaluation");
    let answers = sample_answers();

    let numeric = Condition::new("companySize", Operator::GreaterThan, 50);
    group.bench_function("greater_than", |b| {
        b.iter(|| ConditionEvaluator::evaluate(black_box(&numeric), black_box(&answers)))
    });

    let equal = Condition::new("extraService", Operator::Equal, true);
    group.bench_function("equal", |b| {
        b.iter(|| ConditionEvaluator::evaluate(black_box(&equal), black_box(&answers)))
    });

    let includes = Condition::new("features", Operator::Includes, "warranty");
    group.bench_function("includes", |b| {
        b.iter(|| ConditionEvaluator::evaluate(black_box(&includes), black_box(&answers)))
    });

    let missing = Condition::new("nonexistent", Operator::Equal, 1);
    group.bench_function("missing_field", |b| {
        b.iter(|| ConditionEvaluator::evaluate(black_box(&missing), black_box(&answers)))
    });

    group.finish();
}

fn bench_action_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("action_application");

    let percent = Action::new(ActionKind::Percent, 10.0);
    group.bench_function("percent", |b| {
        b.iter(|| ActionApplicator::apply(black_box(&percent), black_box(100.0)))
    });

    let multiply = Action::new(ActionKind::Multiply, 1.5);
    group.bench_function("multiply", |b| {
        b.iter(|| ActionApplicator::apply(black_box(&multiply), black_box(100.0)))
    });

    group.finish();
}

fn bench_quote_by_rule_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote_by_rule_count");
    let engine = PricingEngine::new();
    let answers = sample_answers();

    for count in [2usize, 10, 50, 200] {
        let rules = build_rule_set(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &rules, |b, rules| {
            b.iter(|| {
                engine.quote(
                    black_box(rules),
                    black_box(&answers),
                    black_box(100.0),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_condition_evaluation,
    bench_action_application,
    bench_quote_by_rule_count
);
criterion_main!(benches);
