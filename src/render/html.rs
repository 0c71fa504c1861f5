//! HTML reporter: the JSON document dropped into a static page, with the
//! label table for the chosen language beside it.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::i18n::Lang;
use crate::model::Summary;

const TEMPLATE: &str = include_str!("../../assets/report.html");
const PLACEHOLDER: &str = "const STATIC_DATA = ``;";
const LABELS_PLACEHOLDER: &str = "const STATIC_LABELS = {};";

pub fn render(summary: &Summary, lang: Lang) -> Result<String> {
  for marker in [PLACEHOLDER, LABELS_PLACEHOLDER] {
    if !TEMPLATE.contains(marker) {
      bail!("HTML template is missing the `{}` placeholder", marker);
    }
  }
  // labels first: they sit above the data and cannot contain its placeholder
  let labels = script_json(lang.messages())?;
  let page = TEMPLATE.replacen(LABELS_PLACEHOLDER, &format!("const STATIC_LABELS = {};", labels), 1);
  Ok(page.replacen(PLACEHOLDER, &format!("const STATIC_DATA = {};", script_json(summary)?), 1))
}

/// `</` inside a <script> element would end it early.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
  Ok(serde_json::to_string_pretty(value)?.replace("</", "<\\/"))
}
