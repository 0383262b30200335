use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ticketqr::{
    classify_cell, encode, is_finder_filled, render_symbol, serialize_to_svg, synthesize_grid,
    unwrap_data_url, wrap_as_data_url, Region, SymbolSize,
};

const S: SymbolSize = SymbolSize::STANDARD;

fn structural_cells() -> Vec<(usize, usize, bool)> {
    let mut cells = Vec::new();
    for row in 0..21 {
        for col in 0..21 {
            match classify_cell(row, col, S) {
                Region::Finder(corner) => {
                    cells.push((row, col, is_finder_filled(row, col, corner.origin(S))))
                }
                Region::Timing => cells.push((row, col, true)),
                Region::Data => {}
            }
        }
    }
    cells
}

#[test]
fn test_ticket_example() {
    let url = render_symbol("OST-ABC123-XYZ", 150.0).unwrap();
    assert!(url.starts_with("data:image/svg+xml;base64,"));

    let svg = unwrap_data_url(&url).unwrap();
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"150\" height=\"150\" viewBox=\"0 0 150 150\">"
    ));
    assert_eq!(svg.matches("<rect width=\"150\" height=\"150\"").count(), 1);
    assert_eq!(
        svg.matches("width=\"7.142857142857143\" height=\"7.142857142857143\"")
            .count(),
        184
    );
    assert_eq!(svg.matches("<rect").count(), 185);
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_structure_count() {
    // 3 * (24 border + 9 center) finder cells and 2 * 7 timing cells
    let filled = structural_cells().iter().filter(|c| c.2).count();
    assert_eq!(filled, 113);
}

#[test]
fn test_empty_payload_guard() {
    let grid = synthesize_grid(&encode(""), S);
    assert_eq!(grid.pixels().count(), 113);
    for row in 0..21 {
        for col in 0..21 {
            if classify_cell(row, col, S) == Region::Data {
                assert!(!grid.get(row, col));
            }
        }
    }
    assert!(render_symbol("", 200.0).is_ok());
}

#[test]
fn test_invalid_size() {
    assert!(render_symbol("x", 0.0).is_err());
    assert!(render_symbol("x", -1.0).is_err());
    assert!(render_symbol("x", f64::NAN).is_err());
    assert!(render_symbol("x", f64::NEG_INFINITY).is_err());
}

proptest! {
    #[test]
    fn prop_deterministic(payload in ".*", size in 1.0f64..2000.0) {
        prop_assert_eq!(render_symbol(&payload, size), render_symbol(&payload, size));
    }

    #[test]
    fn prop_fixed_structure(payload in ".{0,120}") {
        let grid = synthesize_grid(&encode(&payload), S);
        prop_assert_eq!(grid.width(), 21);
        prop_assert_eq!(grid.height(), 21);
        for (row, col, filled) in structural_cells() {
            prop_assert_eq!(grid.get(row, col), filled, "({}, {})", row, col);
        }
    }

    #[test]
    fn prop_timing_lines(payload in any::<String>()) {
        let grid = synthesize_grid(&encode(&payload), S);
        for i in 7..14 {
            prop_assert!(grid.get(6, i));
            prop_assert!(grid.get(i, 6));
        }
    }

    #[test]
    fn prop_scale(payload in "[ -~]{0,60}", size in 1u32..1000) {
        let size = f64::from(size);
        let svg = serialize_to_svg(&synthesize_grid(&encode(&payload), S), size).unwrap();
        let canvas = format!("<rect width=\"{size}\" height=\"{size}\" fill=\"white\"/>");
        prop_assert!(svg.contains(&canvas));
        let cell = format!("width=\"{}\"", size / 21.0);
        prop_assert!(svg.contains(&cell));
    }

    #[test]
    fn prop_data_url_roundtrip(payload in any::<String>(), size in 1.0f64..500.0) {
        let svg = serialize_to_svg(&synthesize_grid(&encode(&payload), S), size).unwrap();
        let url = wrap_as_data_url(&svg);
        prop_assert_eq!(&url, &render_symbol(&payload, size).unwrap());
        prop_assert_eq!(unwrap_data_url(&url).unwrap(), svg);
    }
}
