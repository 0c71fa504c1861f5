//! JSON reporter: the whole [`Summary`] as pretty-printed JSON.

use anyhow::Result;

use crate::model::Summary;

pub fn render(summary: &Summary) -> Result<String> {
  let mut out = serde_json::to_string_pretty(summary)?;
  out.push('\n');
  Ok(out)
}
