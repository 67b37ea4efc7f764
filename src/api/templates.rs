//! HTML for the prediction form.

/// Format with thousands separators and two decimals, e.g. `1,234.57`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" reads oddly; only keep the sign when something non-zero survives rounding
    let sign = if value < 0.0 && fixed.chars().any(|c| matches!(c, '1'..='9')) {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// What the page shows below the form
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Empty,
    Prediction(f64),
    Error(String),
}

pub fn render_predict_page(outcome: &Outcome) -> String {
    let result = match outcome {
        Outcome::Empty => String::new(),
        Outcome::Prediction(value) => format!(
            r#"<section class="result">
      <span class="label">Estimated sales</span>
      <span class="value">${}k</span>
    </section>"#,
            format_thousands(*value)
        ),
        Outcome::Error(message) => format!(
            r#"<section class="result error">
      <span class="label">Could not predict</span>
      <span class="message">{}</span>
    </section>"#,
            escape_html(message)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Sales Predictor</title>
  <style>
    body {{ font-family: system-ui, sans-serif; background: #f4f6fb; color: #1f2937; margin: 0; }}
    main {{ max-width: 420px; margin: 4rem auto; background: #fff; padding: 2rem; border-radius: 12px; box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08); }}
    h1 {{ font-size: 1.5rem; margin: 0 0 0.25rem; }}
    p.hint {{ color: #6b7280; margin: 0 0 1.5rem; font-size: 0.9rem; }}
    label {{ display: block; font-weight: 600; margin-bottom: 0.35rem; }}
    input {{ width: 100%; box-sizing: border-box; padding: 0.6rem; margin-bottom: 1rem; border: 1px solid #d1d5db; border-radius: 8px; font-size: 1rem; }}
    button {{ width: 100%; padding: 0.7rem; border: 0; border-radius: 8px; background: #2563eb; color: #fff; font-size: 1rem; cursor: pointer; }}
    .result {{ margin-top: 1.5rem; padding: 1rem; border-radius: 8px; background: #eff6ff; text-align: center; }}
    .result .label {{ display: block; font-size: 0.8rem; text-transform: uppercase; color: #6b7280; }}
    .result .value {{ display: block; font-size: 1.6rem; font-weight: 700; color: #1d4ed8; }}
    .result.error {{ background: #fef2f2; color: #b91c1c; }}
  </style>
</head>
<body>
  <main>
    <h1>Sales Predictor</h1>
    <p class="hint">Advertising budget per channel, in thousands of dollars.</p>
    <form action="/predict_web" method="post">
      <label for="tv">TV</label>
      <input id="tv" type="number" step="0.01" name="TV" placeholder="0.00" required>
      <label for="radio">Radio</label>
      <input id="radio" type="number" step="0.01" name="Radio" placeholder="0.00" required>
      <label for="newspaper">Newspaper</label>
      <input id="newspaper" type="number" step="0.01" name="Newspaper" placeholder="0.00" required>
      <button type="submit">Predict sales</button>
    </form>
    {result}
  </main>
</body>
</html>
"#
    )
}
