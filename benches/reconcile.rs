use care_dashboard::dashboard::prefs::reconcile;
use care_dashboard::dashboard::{WidgetCatalog, WidgetDescriptor, WidgetPreferences};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_catalog(count: usize) -> WidgetCatalog {
    let widgets = (0..count)
        .map(|i| {
            let id: &'static str = Box::leak(format!("widget_{i:04}").into_boxed_str());
            WidgetDescriptor::new(id, id, "")
        })
        .collect();
    WidgetCatalog::new(widgets)
}

fn build_stale_prefs(count: usize) -> WidgetPreferences {
    // Every third id is gone from the catalog and the list is reversed.
    let order = (0..count)
        .rev()
        .map(|i| {
            if i % 3 == 0 {
                format!("retired_{i:04}")
            } else {
                format!("widget_{i:04}")
            }
        })
        .collect();
    let hidden = (0..count)
        .step_by(5)
        .map(|i| format!("widget_{i:04}"))
        .collect();
    WidgetPreferences { order, hidden }
}

fn bench_reconcile(c: &mut Criterion) {
    let catalog = build_catalog(200);
    let stale = build_stale_prefs(200);
    let fresh = reconcile(&stale, &catalog);

    c.bench_function("reconcile_stale_200", |b| {
        b.iter(|| black_box(reconcile(black_box(&stale), &catalog)))
    });
    c.bench_function("reconcile_clean_200", |b| {
        b.iter(|| black_box(reconcile(black_box(&fresh), &catalog)))
    });
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
