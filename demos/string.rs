use ticketqr::{encode, synthesize_grid, SymbolSize};

fn main() {
    let text = "Doppelgänger";
    let bitmap = synthesize_grid(&encode(text), SymbolSize::STANDARD);
    print!("{}", bitmap.unicode());
}
