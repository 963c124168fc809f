//! Performance benchmarks for a3s-chat
//!
//! Run with: cargo bench

use std::sync::Arc;

use a3s_chat::{AgentRegistry, ChatRequest, ErrorCode, Orchestrator, Pacing, StreamEvent};
use criterion::{criterion_group, criterion_main, Criterion};
use futures::StreamExt;

fn bench_event_encoding(c: &mut Criterion) {
    let token = StreamEvent::token("streaming");
    c.bench_function("StreamEvent::encode token", |b| {
        b.iter(|| token.encode());
    });

    let resolved = StreamEvent::AgentResolved {
        agent: "default".to_string(),
        name: "Default".to_string(),
        description: "General chat assistant".to_string(),
    };
    c.bench_function("StreamEvent::encode agent-resolved", |b| {
        b.iter(|| resolved.encode());
    });

    let frame = StreamEvent::error(ErrorCode::StreamError, "backend crashed").encode();
    c.bench_function("StreamEvent::decode error", |b| {
        b.iter(|| StreamEvent::decode(&frame));
    });
}

fn bench_orchestrator(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let registry = AgentRegistry::with_pacing(Pacing::Instant);
    registry.initialize();
    let orchestrator = Orchestrator::new(Arc::new(registry));

    c.bench_function("Orchestrator default stream", |b| {
        b.to_async(&rt).iter(|| async {
            orchestrator
                .stream(ChatRequest::new("hi", "default"))
                .count()
                .await
        });
    });

    c.bench_function("Orchestrator code stream (per-char)", |b| {
        b.to_async(&rt).iter(|| async {
            orchestrator
                .stream(ChatRequest::new("hi", "code"))
                .count()
                .await
        });
    });

    c.bench_function("Orchestrator unknown agent", |b| {
        b.to_async(&rt).iter(|| async {
            orchestrator
                .stream(ChatRequest::new("hi", "unknown"))
                .count()
                .await
        });
    });
}

criterion_group!(benches, bench_event_encoding, bench_orchestrator);
criterion_main!(benches);
