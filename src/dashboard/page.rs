use crate::api::templates::{escape_html, format_thousands};
use crate::dashboard::chart::render_svg;
use crate::domain::{AdSpend, Feature};

/// Everything needed to draw the dashboard once
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Raw field values to echo back into the form
    pub fields: [String; 3],
    pub result: Result<(AdSpend, f64), String>,
}

impl DashboardView {
    pub fn prediction(spend: AdSpend, prediction: f64) -> Self {
        Self {
            fields: spend.to_features().map(|v| v.to_string()),
            result: Ok((spend, prediction)),
        }
    }

    pub fn error(fields: [String; 3], message: String) -> Self {
        Self {
            fields,
            result: Err(message),
        }
    }
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let inputs: String = Feature::ALL
        .iter()
        .zip(&view.fields)
        .map(|(feature, value)| {
            format!(
                r#"<label>{name} budget<input type="number" step="0.1" name="{name}" value="{value}"></label>"#,
                name = feature.as_str(),
                value = escape_html(value)
            )
        })
        .collect();

    let body = match &view.result {
        Ok((spend, prediction)) => format!(
            r#"<p class="prediction">Predicted sales: <strong>{}</strong></p>
      <h2>Advertising budget</h2>
      {}"#,
            format_thousands(*prediction),
            render_svg(spend)
        ),
        Err(message) => format!(r#"<p class="error">{}</p>"#, escape_html(message)),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Sales Dashboard</title>
  <style>
    body {{ font-family: system-ui, sans-serif; margin: 0; background: #ffffff; color: #111827; }}
    .layout {{ display: flex; min-height: 100vh; }}
    aside {{ width: 260px; padding: 1.5rem; background: #f3f4f6; }}
    aside label {{ display: block; font-size: 0.9rem; margin-bottom: 1rem; }}
    aside input {{ display: block; width: 100%; box-sizing: border-box; margin-top: 0.3rem; padding: 0.45rem; }}
    aside button {{ width: 100%; padding: 0.55rem; background: #dc2626; color: #fff; border: 0; border-radius: 6px; cursor: pointer; }}
    main {{ flex: 1; padding: 2rem 3rem; }}
    .prediction {{ font-size: 1.3rem; padding: 1rem; background: #ecfdf5; border-radius: 6px; }}
    .error {{ padding: 1rem; background: #fef2f2; color: #b91c1c; border-radius: 6px; }}
  </style>
</head>
<body>
  <div class="layout">
    <aside>
      <form method="get" action="/">
        {inputs}
        <button type="submit">Predict</button>
      </form>
    </aside>
    <main>
      <h1>Sales Prediction Dashboard</h1>
      {body}
    </main>
  </div>
</body>
</html>
"#
    )
}
