use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tourmarket_auth::{get_permissions, has_permission, routes, sidebar, Permission, Role};

fn bench_has_permission(c: &mut Criterion) {
    c.bench_function("has_permission/full_matrix", |b| {
        b.iter(|| {
            let mut granted = 0usize;
            for role in Role::ALL {
                for permission in Permission::ALL {
                    if has_permission(black_box(Some(role)), black_box(permission)) {
                        granted += 1;
                    }
                }
            }
            granted
        })
    });
}

fn bench_get_permissions(c: &mut Criterion) {
    c.bench_function("get_permissions/super_admin", |b| {
        b.iter(|| get_permissions(black_box(Some(Role::SuperAdmin))))
    });
}

fn bench_navigation(c: &mut Criterion) {
    c.bench_function("sidebar/support", |b| {
        b.iter(|| sidebar(black_box(Some(Role::Support)), black_box(4)))
    });
    c.bench_function("routes/guard_for", |b| {
        b.iter(|| routes::guard_for(black_box("/admin/tickets/42")))
    });
}

criterion_group!(benches, bench_has_permission, bench_get_permissions, bench_navigation);
criterion_main!(benches);
