use image::{GrayImage, Luma};
use ticketqr::{encode, synthesize_grid, SymbolSize};

/// Generate image which only contains a symbol
fn main() {
    // Define width and height in pixels of one cell in the image.
    const N: usize = 5;

    let bitmap = synthesize_grid(&encode("Hello, World!"), SymbolSize::STANDARD);

    // Create an image with a one cell quiet zone around the symbol
    let width = ((bitmap.width() + 2) * N) as u32;
    let height = ((bitmap.height() + 2) * N) as u32;
    let mut image = GrayImage::from_pixel(width, height, Luma([255]));
    for (x, y) in bitmap.pixels() {
        // Write the dark cell at x, y using NxN black pixels
        for i in 0..N {
            for j in 0..N {
                let x_i = (x + 1) * N + j;
                let y_j = (y + 1) * N + i;
                image.put_pixel(x_i as u32, y_j as u32, Luma([10]));
            }
        }
    }

    image.save("ticket_symbol.png").unwrap();
}
