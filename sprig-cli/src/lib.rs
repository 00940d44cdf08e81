use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::Value;
use sprig_dom::VNode;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EmitMode {
    /// Normalized VNode JSON
    Json,
    /// Indented text outline
    Outline,
}

impl EmitMode {
    fn extension(self) -> &'static str {
        match self {
            EmitMode::Json => "json",
            EmitMode::Outline => "txt",
        }
    }
}

/// Read a hyperscript JSON document and build its tree.
pub fn load_file(input: &Path) -> Result<VNode> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let node = sprig_dom::load::from_str(&src)
        .with_context(|| format!("failed to load {}", input.display()))?;
    debug!(input = %input.display(), nodes = TreeStats::of(&node).nodes, "loaded");
    Ok(node)
}

/// Normalize a hyperscript JSON file and write the result to `out_dir`.
/// Returns the path of the written file.
pub fn build_cmd(input: &Path, out_dir: Option<&Path>, emit: EmitMode) -> Result<PathBuf> {
    let node = load_file(input)?;

    let name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let code = match emit {
        EmitMode::Json => {
            let mut json = serde_json::to_string_pretty(&node).context("failed to serialize tree")?;
            json.push('\n');
            json
        }
        EmitMode::Outline => outline(&node),
    };

    let out_dir = out_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("target/sprig-gen"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let out_path = out_dir.join(format!("{}.{}", name, emit.extension()));
    fs::write(&out_path, code)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!(output = %out_path.display(), ?emit, "build finished");
    Ok(out_path)
}

/// Outline and statistics for a hyperscript JSON file.
pub fn inspect_cmd(input: &Path) -> Result<String> {
    let node = load_file(input)?;
    let stats = TreeStats::of(&node);
    let mut report = outline(&node);
    report.push('\n');
    report.push_str(&stats.to_string());
    report.push('\n');
    Ok(report)
}

/// Node counts for a tree, the root included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub elements: usize,
    pub texts: usize,
    pub fragments: usize,
    pub max_depth: usize,
}

impl TreeStats {
    pub fn of(root: &VNode) -> Self {
        fn walk(v: &VNode, depth: usize, stats: &mut TreeStats) {
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(depth);
            match v {
                VNode::Element { .. } => stats.elements += 1,
                VNode::Text { .. } => stats.texts += 1,
                VNode::Fragment { .. } => stats.fragments += 1,
            }
            for c in v.children() {
                walk(c, depth + 1, stats);
            }
        }
        let mut stats = TreeStats::default();
        walk(root, 1, &mut stats);
        stats
    }
}

impl std::fmt::Display for TreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nodes: {} (elements: {}, text: {}, fragments: {}), depth: {}",
            self.nodes, self.elements, self.texts, self.fragments, self.max_depth
        )
    }
}

/// One line per node, indented two spaces per level.
pub fn outline(root: &VNode) -> String {
    fn line(v: &VNode, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match v {
            VNode::Element { tag, props, .. } => {
                let _ = write!(out, "{indent}<{tag}");
                for (k, val) in props.iter() {
                    match val {
                        Value::String(s) => { let _ = write!(out, " {k}={s}"); }
                        other => { let _ = write!(out, " {k}={other}"); }
                    }
                }
                out.push_str(">\n");
            }
            // Value's Display gives JSON quoting and escaping
            VNode::Text { value } => {
                let _ = writeln!(out, "{indent}{}", Value::String(value.clone()));
            }
            VNode::Fragment { .. } => {
                let _ = writeln!(out, "{indent}<>");
            }
        }
        for c in v.children() {
            line(c, depth + 1, out);
        }
    }
    let mut out = String::new();
    line(root, 0, &mut out);
    out
}
