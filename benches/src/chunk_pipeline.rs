use async_trait::async_trait;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ingest::aggregate::{DEFAULT_SKIP_DISPLAY_LIMIT, aggregate};
use ingest::prelude::*;
use tokio::runtime::Runtime;

/// Submitter that answers immediately, skipping every tenth user
struct Instant;

#[async_trait]
impl ChunkSubmitter for Instant {
    type Record = UserRecord;
    type Receipt = UserBatchReceipt;

    async fn submit(
        &self,
        chunk: Chunk<UserRecord>,
        _progress: &dyn TransferObserver,
    ) -> Result<UserBatchReceipt, TransportError> {
        let skipped: Vec<SkippedEntry> = chunk
            .records
            .iter()
            .step_by(10)
            .map(|user| SkippedEntry::new(user.username.clone(), "User already exists"))
            .collect();
        let accepted = (chunk.len() - skipped.len()) as u64;
        Ok(UserBatchReceipt::new(accepted, skipped))
    }
}

fn generate_users(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| {
            UserRecord::normalized(
                &format!("user{i:05}"),
                &format!("user{i}@example.com"),
                "5550100",
                "password123",
                Role::User,
            )
        })
        .collect()
}

/// Validation plus planning, without dispatch
fn bench_validate_and_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_and_plan");

    for count in [200usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || generate_users(count),
                |users| {
                    black_box(validate_users(&users));
                    black_box(plan(users, &ChunkPolicy::tiered()));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Folding chunk outcomes into a summary
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for chunks in [5usize, 50, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(chunks), &chunks, |b, &chunks| {
            b.iter_batched(
                || {
                    (0..chunks)
                        .map(|index| {
                            if index % 7 == 3 {
                                ChunkOutcome::rejected(
                                    index,
                                    200,
                                    FailureReason::Transport(TransportError::Timeout),
                                )
                            } else {
                                ChunkOutcome::fulfilled(
                                    index,
                                    200,
                                    ChunkPayload::Records {
                                        accepted: 199,
                                        skipped: 1,
                                        skipped_entries: vec![SkippedEntry::new(
                                            format!("user{index}"),
                                            "User already exists",
                                        )],
                                    },
                                )
                            }
                        })
                        .collect::<Vec<_>>()
                },
                |outcomes| {
                    black_box(aggregate(
                        RecordKind::User,
                        chunks,
                        DEFAULT_SKIP_DISPLAY_LIMIT,
                        outcomes,
                    ))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Whole engine run against an instant endpoint, both dispatch modes
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let runtime = Runtime::new().unwrap();
    let job = JobId::new("bench").unwrap();

    for (name, mode) in [
        ("parallel", EngineConfig::default().user_import_mode()),
        (
            "sequential",
            DispatchMode::SequentialProgressive(ChunkPolicy::tiered()),
        ),
    ] {
        group.bench_function(BenchmarkId::new(name, 1_000), |b| {
            b.to_async(&runtime).iter_batched(
                || generate_users(1_000),
                |users| {
                    let engine = IngestionEngine::default();
                    let job = job.clone();
                    let mode = mode.clone();
                    async move { black_box(engine.ingest(&job, users, &mode, &Instant).await) }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate_and_plan, bench_aggregate, bench_engine);
criterion_main!(benches);
