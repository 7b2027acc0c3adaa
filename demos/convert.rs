use chromix::models::{Lab, Lch, SrgbLinear, ToXyz};

pub fn main() {
    let lch = Lch::new(56.6293, 69.9928, 55.7142);

    // 56.6293, 39.4284, 57.8307
    let lab = lch.to_rectangular();

    // 0.3330, 0.2454, 0.0417
    let xyz = lab.to_xyz();

    let srgb_linear = SrgbLinear::from(xyz);
    let srgb = srgb_linear.to_gamma_encoded();

    dbg!(srgb);

    // And back again.
    dbg!(Lab::from(srgb.to_linear_light().to_xyz()).to_polar());
}
