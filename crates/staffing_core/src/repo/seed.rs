//! Fixed dataset loaded on construction and on `reset()`.

/// Job names in id order.
pub const SEED_JOBS: &[&str] = &[
    "Software Engineer",
    "Database Manager",
    "System Administrator",
];

/// `(name, index into SEED_JOBS, salary)` in id order.
pub const SEED_WORKERS: &[(&str, usize, f64)] = &[
    ("Alice", 0, 40_000.0),
    ("Bob", 1, 30_000.0),
    ("Carol", 2, 50_000.0),
    ("David", 0, 39_000.0),
];
