//! calib-report - calibration screenshot analysis
//!
//! Walks the categorized calibration-screenshot tree and verifies that
//! every expected render is present, printing per-file sizes and a summary
//! of anything missing. Exits non-zero when the set is incomplete so CI
//! can gate on it.
//!
//! Pure I/O glue: no state machine, no concurrency, no retries.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Expected render: file stem and human description
type RenderDef = (&'static str, &'static str);

/// One category folder and its expected renders
struct CategoryDef {
    folder: &'static str,
    renders: &'static [RenderDef],
}

/// All expected calibration screenshots - single source of truth
const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        folder: "01-roughness",
        renders: &[
            ("mirror", "0% - Perfect mirror reflection"),
            ("glossy", "15% - Glossy reflection"),
            ("satin", "35% - Satin finish"),
            ("balanced", "50% - Balanced"),
            ("matte", "75% - Matte"),
            ("pure-matte", "100% - Pure diffuse"),
        ],
    },
    CategoryDef {
        folder: "02-fresnel",
        renders: &[
            ("front", "Front view - minimal Fresnel"),
            ("rim", "Rim view - strong Fresnel edges"),
            ("grazing", "Grazing angle - maximum Fresnel"),
        ],
    },
    CategoryDef {
        folder: "03-ambient-occlusion",
        renders: &[
            ("none", "100% - No darkening"),
            ("light", "75% - Light shadows"),
            ("medium", "50% - Medium shadows"),
            ("heavy", "25% - Heavy shadows"),
            ("maximum", "0% - Black crevices"),
        ],
    },
    CategoryDef {
        folder: "04-subsurface-scattering",
        renders: &[
            ("none", "0% - Opaque surface"),
            ("light", "30% - Light translucency"),
            ("moderate", "60% - Moderate penetration"),
            ("strong", "100% - Strong glow"),
        ],
    },
    CategoryDef {
        folder: "05-metallic",
        renders: &[
            ("dielectric", "0% - Pure dielectric"),
            ("semi-metal-25", "25% - Slightly metallic"),
            ("semi-metal-50", "50% - Half metal"),
            ("semi-metal-75", "75% - Mostly metal"),
            ("pure-metal", "100% - Pure metal"),
            ("metal-rough", "100% metal + 60% roughness"),
            ("metal-mirror-front", "Metal mirror - FRONT"),
            ("metal-mirror-rim", "Metal mirror - RIM"),
            ("metal-mirror-grazing", "Metal mirror - GRAZING"),
        ],
    },
    CategoryDef {
        folder: "06-anisotropy",
        renders: &[
            ("isotropic", "0 - Isotropic"),
            ("light-horizontal", "30% - Light horizontal"),
            ("moderate-horizontal", "60% - Moderate horizontal"),
            ("strong-horizontal", "100% - Dramatic horizontal"),
            ("light-vertical", "-30% - Light vertical"),
            ("strong-vertical", "-100% - Dramatic vertical"),
            ("aniso-front", "100% horizontal - FRONT"),
            ("aniso-rim", "100% horizontal - RIM"),
            ("aniso-grazing", "100% horizontal - GRAZING"),
            ("aniso-topdown", "100% horizontal - TOP-DOWN"),
        ],
    },
    CategoryDef {
        folder: "07-iridescence",
        renders: &[
            ("none", "0% - Standard surface"),
            ("subtle", "30% - Subtle color shift"),
            ("moderate", "60% - Visible rainbow"),
            ("strong", "100% - Dramatic iridescence"),
            ("irid-front", "100% - FRONT view"),
            ("irid-rim", "100% - RIM view"),
            ("irid-grazing", "100% - GRAZING view"),
            ("irid-closeup", "100% - CLOSEUP view"),
            ("smooth-irid-mirror", "100% irid + 0% rough"),
        ],
    },
    CategoryDef {
        folder: "08-combined-materials",
        renders: &[
            ("jade", "Jade - SSS + AO + Fresnel"),
            ("brushed-copper", "Brushed Copper - Aniso + Metal + AO"),
            ("soap-bubble", "Soap Bubble - Irid + SSS + mirror"),
            ("polished-marble", "Polished Marble - SSS + AO + Fresnel"),
            ("opal", "Opal - SSS + Irid + AO"),
            ("brushed-titanium", "Brushed Titanium - Aniso + Metal + irid"),
        ],
    },
    CategoryDef {
        folder: "09-edge-cases",
        renders: &[
            ("all-zero", "All effects disabled"),
            ("all-maximum", "All effects maxed"),
            ("metal-sss-conflict", "Metal + SSS conflict"),
            ("mirror-ao-conflict", "Mirror metal + maximum AO"),
            ("extreme-aniso-irid", "Extreme aniso + iridescence"),
        ],
    },
    CategoryDef {
        folder: "10-geometry-tests",
        renders: &[
            ("teapot", "Utah Teapot (3K verts)"),
            ("bunny", "Stanford Bunny (35K verts)"),
            ("suzanne", "Suzanne (507 verts)"),
            ("torus-knot", "Torus Knot (4K verts)"),
            ("cow", "Spot Cow (2.9K verts)"),
            ("dragon", "Stanford Dragon (437K verts)"),
        ],
    },
];

#[derive(Parser)]
#[command(name = "calib-report")]
#[command(about = "Verify presence and size of rendered calibration screenshots")]
#[command(version)]
struct Cli {
    /// Root of the calibration screenshot tree
    #[arg(short, long, default_value = "calibration-screenshots")]
    dir: PathBuf,
}

struct Report {
    found: usize,
    total: usize,
    missing: Vec<PathBuf>,
}

/// Check every expected screenshot under `root`, printing one line per file.
fn check_tree(root: &Path) -> Report {
    let mut report = Report {
        found: 0,
        total: 0,
        missing: Vec::new(),
    };

    for category in CATEGORIES {
        println!();
        println!("{}", category.folder.to_uppercase());
        println!("{}", "-".repeat(80));

        for (stem, description) in category.renders {
            report.total += 1;
            let path = root.join(category.folder).join(format!("{}.png", stem));

            match fs::metadata(&path) {
                Ok(meta) => {
                    report.found += 1;
                    println!(
                        "  ✓ {:30} {:50} ({:.1} KB)",
                        stem,
                        description,
                        meta.len() as f64 / 1024.0
                    );
                }
                Err(_) => {
                    report.missing.push(path);
                    println!("  ✗ {:30} {:50} MISSING!", stem, description);
                }
            }
        }
    }

    report
}

fn main() {
    let cli = Cli::parse();

    println!("{}", "=".repeat(80));
    println!("CALIBRATION SCREENSHOT ANALYSIS");
    println!("{}", "=".repeat(80));

    let report = check_tree(&cli.dir);

    println!();
    println!("{}", "=".repeat(80));
    println!("SUMMARY: {}/{} files found", report.found, report.total);
    if !report.missing.is_empty() {
        println!("Missing: {} files", report.missing.len());
        for path in &report.missing {
            println!("  - {}", path.display());
        }
    }
    println!("{}", "=".repeat(80));

    if !report.missing.is_empty() {
        std::process::exit(1);
    }
}
