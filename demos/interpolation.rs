use chromix::{Color, Space};

fn main() {
    let blue: Color = "#0000ff".parse().expect("valid hex color");
    let yellow: Color = "#ffff00".parse().expect("valid hex color");

    for space in Space::ALL {
        let middle = blue.interpolate(&yellow, 0.5, space);
        println!("{space:>24}: {:?}", middle.components);

        // Convert the result back to sRGB color space.
        let srgb = blue.lerp(&yellow, 0.5, space, true);
        println!("{:>24}  {:?}", "as srgb", srgb.components);
    }
}
