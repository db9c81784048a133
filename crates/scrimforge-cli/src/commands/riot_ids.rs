use std::path::Path;

use anyhow::Context;
use scrimforge_roster::{extract_riot_ids, normalize_source, RiotId};
use serde_json::{json, Value};

use crate::OutputFormat;

pub fn riot_ids(path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let ids = collect_ids(&text);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(&ids))?),
        OutputFormat::Text => {
            for id in &ids {
                println!("{id}");
            }
        }
    }

    Ok(())
}

fn collect_ids(text: &str) -> Vec<RiotId> {
    extract_riot_ids(&normalize_source(text)).collect()
}

fn to_json(ids: &[RiotId]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| json!({ "gameName": id.game_name, "tagLine": id.tag_line }))
            .collect(),
    )
}
