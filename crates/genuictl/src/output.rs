//! Output formatting for the non-interactive subcommands

use anyhow::Result;
use genui_common::apps::fractal::{self, HAUSDORFF_DIMENSION};
use genui_common::prompts::EXAMPLE_PROMPTS;
use genui_common::{resolve_component, ComponentKind};
use owo_colors::OwoColorize;
use serde::Serialize;

/// One row of `genui prompts`
#[derive(Debug, Serialize)]
pub struct PromptEntry {
    pub index: usize,
    pub prompt: &'static str,
    pub component: Option<ComponentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
}

pub fn prompt_entries() -> Vec<PromptEntry> {
    EXAMPLE_PROMPTS
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let component = resolve_component(p.text);
            PromptEntry {
                index: index + 1,
                prompt: p.text,
                component,
                title: component.map(ComponentKind::title),
            }
        })
        .collect()
}

pub fn print_prompts(json: bool) -> Result<()> {
    let entries = prompt_entries();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "[EXAMPLE PROMPTS]".bold());
    for entry in &entries {
        let component = entry
            .component
            .map(|c| c.id().to_string())
            .unwrap_or_else(|| "none".to_string());
        println!(
            "  {}  {}  {} {}",
            entry.index.to_string().dimmed(),
            entry.prompt,
            "->".dimmed(),
            component.cyan()
        );
    }
    Ok(())
}

/// Plain id for scripts: `clock`, `math_quiz`, ... or `none`
pub fn resolution_line(prompt: &str) -> &'static str {
    resolve_component(prompt).map(ComponentKind::id).unwrap_or("none")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractalSummary {
    pub depth: u32,
    pub triangles: usize,
    pub hausdorff_dimension: f64,
}

pub fn fractal_summary(depth: u32) -> FractalSummary {
    let depth = depth.min(*fractal::DEPTH_RANGE.end());
    FractalSummary {
        depth,
        triangles: fractal::generate(depth).len(),
        hausdorff_dimension: HAUSDORFF_DIMENSION,
    }
}

pub fn print_fractal(summary: &FractalSummary) {
    println!("{}", "[SIERPINSKI]".bold());
    println!("  Depth:               {}", summary.depth);
    println!("  Triangles:           {}", summary.triangles.to_string().green());
    println!("  Hausdorff dimension: ≈ {:.3}", summary.hausdorff_dimension);
}
