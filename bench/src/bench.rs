use criterion::{Bencher, Criterion};

mod parse;
mod print;

fn main() {
    // The Criterion macros hide too much, so the setup is written out.
    let mut c = Criterion::default()
        .configure_from_args()
        .sample_size(100)
        // default is 3s
        .warm_up_time(std::time::Duration::from_secs(1))
        // default is 5s
        .measurement_time(std::time::Duration::from_secs(3))
        .nresamples(100_000)
        .noise_threshold(0.01)
        .confidence_level(0.95)
        .significance_level(0.05)
        .plotting_backend(criterion::PlottingBackend::None);
    parse::define(&mut c);
    print::define(&mut c);
    c.final_summary();
}

/// Defines a Criterion benchmark for the given function.
///
/// Every benchmark goes through here so that settings that apply to all of
/// them can be tweaked in one place.
fn benchmark(
    c: &mut Criterion,
    id: impl Into<String>,
    f: impl FnMut(&mut Bencher<'_>),
) {
    c.bench_function(&id.into(), f);
}
