//! split-emotions - emotion source splitter
//!
//! One-time transform that separates each emotion state module into a
//! visual/behavioral base module and a rhythm-sync module, so
//! audio-reactive builds can load rhythm data independently.
//!
//! The rhythm section is located by its `// Rhythm` marker comment and the
//! `rhythm: { ... }` object that follows it (one nesting level). Missing
//! source files and files without a rhythm section are skipped with a
//! warning; re-running the tool is safe.

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;
use std::fs;
use std::path::PathBuf;

/// Emotion states to split
const EMOTIONS: &[&str] = &[
    "neutral", "joy", "sadness", "anger", "fear", "surprise", "disgust", "love", "suspicion",
    "excited", "resting", "euphoria", "focused", "glitch", "calm",
];

#[derive(Parser)]
#[command(name = "split-emotions")]
#[command(about = "Split emotion state modules into base + rhythm modules")]
#[command(version)]
struct Cli {
    /// Directory containing states/; base/ and rhythm/ are created alongside
    #[arg(long, default_value = "src/core/emotions")]
    emotions_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let states_dir = cli.emotions_dir.join("states");
    let base_dir = cli.emotions_dir.join("base");
    let rhythm_dir = cli.emotions_dir.join("rhythm");

    fs::create_dir_all(&base_dir).with_context(|| format!("Failed to create {:?}", base_dir))?;
    fs::create_dir_all(&rhythm_dir)
        .with_context(|| format!("Failed to create {:?}", rhythm_dir))?;

    for &emotion in EMOTIONS {
        println!();
        println!("Processing: {}", emotion);

        let source = states_dir.join(format!("{}.js", emotion));
        if !source.exists() {
            println!("  Warning: skipping - file not found");
            continue;
        }
        let content =
            fs::read_to_string(&source).with_context(|| format!("Failed to read {:?}", source))?;

        let Some(section) = find_rhythm_section(&content) else {
            println!("  Warning: no rhythm section found");
            continue;
        };

        let base = base_module(&content, &section, emotion);
        let base_path = base_dir.join(format!("{}.js", emotion));
        fs::write(&base_path, base).with_context(|| format!("Failed to write {:?}", base_path))?;
        println!("  OK: created base/{}.js", emotion);

        let Some(object) = extract_rhythm_object(&section) else {
            println!("  Warning: could not extract rhythm object");
            continue;
        };
        let rhythm_path = rhythm_dir.join(format!("{}.js", emotion));
        fs::write(&rhythm_path, rhythm_module(&object, emotion))
            .with_context(|| format!("Failed to write {:?}", rhythm_path))?;
        println!("  OK: created rhythm/{}.js", emotion);
    }

    println!();
    println!("Emotion split complete");
    Ok(())
}

/// Locate the rhythm section: marker comment plus the `rhythm: { ... }`
/// object (single nesting level) with its trailing comma.
fn find_rhythm_section(content: &str) -> Option<String> {
    let pattern = Regex::new(r"(?s)\n    // Rhythm.*?\n    rhythm: \{(?:[^{}]|\{[^{}]*\})*\},?")
        .expect("valid rhythm section pattern");
    pattern.find(content).map(|m| m.as_str().to_string())
}

/// Base module: the source with the rhythm section removed and the headers
/// retitled for the visual/behavioral half.
fn base_module(content: &str, section: &str, emotion: &str) -> String {
    let base = content.replace(section, "");

    let title = format!("{} Emotion", capitalize(emotion));
    let base = base.replace(&title, &format!("{} Emotion (Base)", capitalize(emotion)));

    let fileoverview = Regex::new(r"(@fileoverview [^\n]+)\n").expect("valid fileoverview pattern");
    let base = fileoverview.replace_all(&base, "${1} (visual/behavioral only)\n");

    base.replace("@module emotions/states/", "@module emotions/base/")
}

/// Extract the bare `{ ... }` rhythm object from the section
fn extract_rhythm_object(section: &str) -> Option<String> {
    let pattern = Regex::new(r"(?s)rhythm: (\{(?:[^{}]|\{[^{}]*\})*\})")
        .expect("valid rhythm object pattern");
    pattern
        .captures(section)
        .map(|caps| caps[1].to_string())
}

/// Render the standalone rhythm-sync module around the extracted object
fn rhythm_module(object: &str, emotion: &str) -> String {
    let title = capitalize(emotion);
    format!(
        r"/**
 * ═══════════════════════════════════════════════════════════════════════════════════════
 *  ╔═○─┐ emotive
 *    ●●  ENGINE - {title} Emotion (Rhythm Sync)
 *  └─○═╝
 * ═══════════════════════════════════════════════════════════════════════════════════════
 *
 * @fileoverview {title} emotional state - rhythm sync configuration
 * @author Emotive Engine Team
 * @module emotions/rhythm/{emotion}
 */

/**
 * {title} emotion rhythm configuration
 * Contains only rhythm sync properties for audio-reactive builds
 * Base properties are in base/{emotion}.js
 */
export default {{
    // Rhythm configuration
    rhythm: {object}
}};
"
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOY_SOURCE: &str = r"/**
 * @fileoverview Joy emotional state
 * @author Emotive Engine Team
 * @module emotions/states/joy
 */

/**
 * Joy Emotion
 */
export default {
    name: 'joy',
    visual: {
        glowColor: '#FFD700',
        particleRate: 12
    },

    // Rhythm sync configuration
    rhythm: {
        enabled: true,
        bounce: { amplitude: 0.5 },
        pulseOnBeat: true
    },
};
";

    #[test]
    fn finds_the_rhythm_section() {
        let section = find_rhythm_section(JOY_SOURCE).expect("section");
        assert!(section.contains("// Rhythm sync configuration"));
        assert!(section.contains("pulseOnBeat: true"));
        assert!(section.ends_with("},"));
    }

    #[test]
    fn missing_rhythm_section_is_none() {
        let source = "export default {\n    name: 'calm',\n};\n";
        assert!(find_rhythm_section(source).is_none());
    }

    #[test]
    fn base_module_drops_rhythm_and_retitles() {
        let section = find_rhythm_section(JOY_SOURCE).expect("section");
        let base = base_module(JOY_SOURCE, &section, "joy");

        assert!(!base.contains("rhythm:"));
        assert!(!base.contains("pulseOnBeat"));
        assert!(base.contains("Joy Emotion (Base)"));
        assert!(base.contains("@fileoverview Joy emotional state (visual/behavioral only)"));
        assert!(base.contains("@module emotions/base/joy"));
        // Visual half survives untouched
        assert!(base.contains("glowColor: '#FFD700'"));
    }

    #[test]
    fn extracts_the_bare_rhythm_object() {
        let section = find_rhythm_section(JOY_SOURCE).expect("section");
        let object = extract_rhythm_object(&section).expect("object");

        assert!(object.starts_with('{'));
        assert!(object.ends_with('}'));
        assert!(object.contains("bounce: { amplitude: 0.5 }"));
    }

    #[test]
    fn rhythm_module_wraps_the_object() {
        let module = rhythm_module("{\n        enabled: true\n    }", "joy");

        assert!(module.contains("@module emotions/rhythm/joy"));
        assert!(module.contains("Joy Emotion (Rhythm Sync)"));
        assert!(module.contains("rhythm: {\n        enabled: true\n    }"));
        assert!(module.contains("Base properties are in base/joy.js"));
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("joy"), "Joy");
        assert_eq!(capitalize(""), "");
    }
}
