//! Render one gradient bar per color space into a PNG so the interpolation
//! paths can be compared side by side.

use std::{ops::Range, path::PathBuf};

use anyhow::{ensure, Context, Result};
use chromix::{Color, Component, Space};
use clap::Parser;
use image::{Rgba, RgbaImage};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A row in the comparison.
struct Choice {
    label: &'static str,
    space: Space,
    description: &'static str,
}

/// The rows rendered by default, in display order.
const CHOICES: &[Choice] = &[
    Choice {
        label: "RGB",
        space: Space::Rgb,
        description: "Straight blend of the gamma encoded channels.",
    },
    Choice {
        label: "Linear RGB",
        space: Space::DegammaRgb,
        description: "Blend of physical light intensity.",
    },
    Choice {
        label: "Euclidean HCL",
        space: Space::EuclideanHcl,
        description: "Hue and chroma as a point on the chroma plane, luma kept separate.",
    },
    Choice {
        label: "Lab",
        space: Space::DegammaLab,
        description: "CIE-Lab, approximately perceptually uniform.",
    },
    Choice {
        label: "Partial IPT (L'M'S')",
        space: Space::DegammaLmsCompressed,
        description: "Compressed cone responses, the first step into IPT.",
    },
    Choice {
        label: "IPT",
        space: Space::DegammaIpt,
        description: "Designed for hue linearity.",
    },
    Choice {
        label: "Lch",
        space: Space::DegammaLch,
        description: "Cylindrical CIE-Lab; the hue takes the shorter arc.",
    },
    Choice {
        label: "HSL",
        space: Space::Hsl,
        description: "Hue, saturation and lightness.",
    },
    Choice {
        label: "HCL",
        space: Space::Hcl,
        description: "Hue, chroma and Rec. 709 luma.",
    },
    Choice {
        label: "HSV",
        space: Space::Hsv,
        description: "Hue, saturation and value.",
    },
];

/// Rows only rendered with `--all`.
const LINEAR_CHOICES: &[Choice] = &[
    Choice {
        label: "Linear Euclidean HCL",
        space: Space::DegammaEuclideanHcl,
        description: "Euclidean HCL of linear light.",
    },
    Choice {
        label: "Linear HSL",
        space: Space::DegammaHsl,
        description: "HSL of linear light.",
    },
    Choice {
        label: "Linear HCL",
        space: Space::DegammaHcl,
        description: "HCL of linear light.",
    },
    Choice {
        label: "Linear HSV",
        space: Space::DegammaHsv,
        description: "HSV of linear light.",
    },
];

#[derive(Parser)]
#[command(
    name = "chromix-gradient",
    about = "Render gradients between two colors interpolated in different color spaces",
    version
)]
struct Cli {
    /// Start color in hex notation
    #[arg(long, default_value = "#0000ff")]
    from: Color,

    /// End color in hex notation
    #[arg(long, default_value = "#ffff00")]
    to: Color,

    /// Comma separated color spaces to render instead of the default rows
    #[arg(long, value_delimiter = ',')]
    spaces: Vec<Space>,

    /// Also render the linear light variants of the HSL, HSV and HCL rows
    #[arg(long)]
    all: bool,

    /// Number of flat segments per gradient bar
    #[arg(long, default_value_t = 80)]
    segments: u32,

    /// Width of the image in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Height of every gradient bar in pixels
    #[arg(long, default_value_t = 30)]
    row_height: u32,

    /// Gap between bars in pixels
    #[arg(long, default_value_t = 10)]
    spacing: u32,

    /// Output file path
    #[arg(short, long, default_value = "gradient.png")]
    output: PathBuf,
}

/// Resolve the rows to render, keeping the labels of known spaces.
fn rows(cli: &Cli) -> Vec<(&'static str, Space)> {
    let known = || CHOICES.iter().chain(LINEAR_CHOICES);

    if !cli.spaces.is_empty() {
        return cli
            .spaces
            .iter()
            .map(|&space| {
                let label = known()
                    .find(|choice| choice.space == space)
                    .map_or(space.name(), |choice| choice.label);
                (label, space)
            })
            .collect();
    }

    let extra = if cli.all { LINEAR_CHOICES } else { &[] };
    CHOICES
        .iter()
        .chain(extra)
        .map(|choice| {
            debug!(label = choice.label, space = %choice.space, "{}", choice.description);
            (choice.label, choice.space)
        })
        .collect()
}

/// Progress of segment `i` out of `segments`, so the first segment is the
/// start color and the last segment the end color.
fn progress(i: u32, segments: u32) -> Component {
    if segments > 1 {
        i as Component / (segments - 1) as Component
    } else {
        0.0
    }
}

/// Horizontal pixel span covered by segment `i`.
fn segment_span(i: u32, segments: u32, width: u32) -> Range<u32> {
    let segment_width = width as f64 / segments as f64;
    let left = (i as f64 * segment_width).floor() as u32;
    let right = (((i + 1) as f64 * segment_width).floor() as u32).min(width);
    left..right
}

fn to_pixel(color: &Color) -> Rgba<u8> {
    let quantize = |v: Component| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([
        quantize(color.components.0),
        quantize(color.components.1),
        quantize(color.components.2),
        quantize(color.alpha),
    ])
}

/// Paint one bar per row and count, per row, the samples that fall outside
/// the sRGB gamut before clamping.
fn render(cli: &Cli, rows: &[(&'static str, Space)]) -> (RgbaImage, Vec<usize>) {
    let height = rows.len() as u32 * (cli.row_height + cli.spacing);
    let mut img = RgbaImage::from_pixel(cli.width, height.max(1), Rgba([32, 32, 32, 255]));
    let mut out_of_gamut = vec![0; rows.len()];

    for (row, &(_, space)) in rows.iter().enumerate() {
        let top = row as u32 * (cli.row_height + cli.spacing) + cli.spacing / 2;

        for i in 0..cli.segments {
            let color = cli
                .from
                .lerp(&cli.to, progress(i, cli.segments), space, false);
            if !color.in_gamut() {
                out_of_gamut[row] += 1;
            }

            let pixel = to_pixel(&color.clip());
            for x in segment_span(i, cli.segments, cli.width) {
                for y in top..top + cli.row_height {
                    img.put_pixel(x, y, pixel);
                }
            }
        }
    }

    (img, out_of_gamut)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromix_gradient=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    ensure!(cli.segments > 0, "at least one segment is required");
    ensure!(cli.width > 0 && cli.row_height > 0, "image dimensions must be positive");

    let rows = rows(&cli);
    let (img, out_of_gamut) = render(&cli, &rows);

    for (row, (&(label, space), out_of_gamut)) in rows.iter().zip(out_of_gamut).enumerate() {
        if out_of_gamut > 0 {
            warn!(label, %space, out_of_gamut, "segments fall outside the sRGB gamut");
        }
        info!(row, label, %space, "rendered");
    }

    img.save(&cli.output)
        .with_context(|| format!("could not write image to {}", cli.output.display()))?;

    info!(path = %cli.output.display(), rows = rows.len(), "wrote gradient comparison");

    Ok(())
}
