//! Benchmark-only crate; the targets live under `benches/`.
