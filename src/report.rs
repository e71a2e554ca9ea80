use crate::error::Result;
use crate::types::{Conference, Standings};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(standings: &Standings, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(standings)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(standings)?),
    }
}

fn render_text(standings: &Standings) -> String {
    let mut out = String::new();
    for (i, conference) in Conference::ALL.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(conference.display_name());
        out.push('\n');
        for row in standings.table(conference) {
            out.push_str(&format!("{}\n", row));
        }
    }
    out
}
