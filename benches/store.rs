// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dualgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dualgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dualgraph::adapter::{NodeChange, PlanarAdapter};
use dualgraph::geom::PlanarPosition;
use dualgraph::model::fixtures::lattice;
use dualgraph::model::NodeId;
use dualgraph::ops::{apply_ops, GraphOp};
use dualgraph::store::GraphStore;

fn seeded(cols: usize, rows: usize) -> GraphStore {
    let (nodes, edges) = lattice(cols, rows);
    GraphStore::seeded(nodes, edges).expect("seed lattice")
}

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

// Benchmark identity (keep stable):
// - Group name in this file: `store.mutate`
// - Case IDs must remain stable across refactors so results stay comparable.
fn benches_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.mutate");

    let mut store = seeded(32, 32);
    let dragged = nid("r16c16");
    let mut step = 0.0;
    group.bench_function("drag_frame_large", |b| {
        b.iter(|| {
            step += 1.0;
            black_box(store.move_node(&dragged, PlanarPosition::new(step, step)))
        })
    });

    let planar = PlanarAdapter::new(seeded(32, 32).into_shared());
    let mut step = 0.0;
    group.bench_function("planar_drag_frame_large", |b| {
        b.iter(|| {
            step += 1.0;
            let change = NodeChange::Position {
                id: dragged.clone(),
                position: Some(PlanarPosition::new(step, step)),
                dragging: true,
            };
            black_box(planar.apply_node_changes(black_box(&[change])).expect("apply"))
        })
    });

    let base = seeded(32, 32);
    group.bench_function("delete_hub_large", |b| {
        b.iter_batched_ref(
            || base.clone(),
            |store| black_box(store.delete_node(&dragged)),
            BatchSize::SmallInput,
        )
    });

    let ops = (0..32)
        .map(|col| GraphOp::MoveNode {
            node_id: nid(&format!("r0c{col}")),
            position: PlanarPosition::new(col as f64 * 10.0, -50.0),
        })
        .chain([GraphOp::DeleteNode { node_id: nid("r31c31") }])
        .collect::<Vec<_>>();
    group.bench_function("apply_batch_large", |b| {
        b.iter_batched_ref(
            || base.clone(),
            |store| black_box(apply_ops(store, black_box(&ops)).expect("apply_ops")),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("snapshot_large", |b| b.iter(|| black_box(base.snapshot())));

    group.finish();
}

criterion_group!(benches, benches_store);
criterion_main!(benches);
