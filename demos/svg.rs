use ticketqr::{encode, serialize_to_svg, synthesize_grid, SymbolSize};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let payload = std::env::args().nth(1).unwrap_or_else(|| "Hello, SVG!".to_owned());
    let bitmap = synthesize_grid(&encode(&payload), SymbolSize::STANDARD);
    println!("{}", serialize_to_svg(&bitmap, 200.0).unwrap());
}
