use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout carries only the demonstration
    // lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("bfc v0.1.0");

    print!("{}", demo_report());
}

#[cfg(feature = "bfc")]
fn demo_report() -> String {
    bitops::bfc::demonstrate(u32::MAX)
        .iter()
        .map(|case| format!("{case}\n"))
        .collect()
}

// Targets without the bit-field clear capability get no demonstration
// at all, only a clean exit.
#[cfg(not(feature = "bfc"))]
fn demo_report() -> String {
    String::new()
}
