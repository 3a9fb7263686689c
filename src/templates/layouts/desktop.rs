use maud::{html, Markup, PreEscaped, DOCTYPE};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

// Draws every `[data-figure]` element, on first load and after each htmx swap.
const RENDER_FIGURES_JS: &str = r#"
function renderFigures() {
  document.querySelectorAll('[data-figure]').forEach(function (el) {
    var fig = JSON.parse(el.dataset.figure);
    Plotly.react(el, fig.data, fig.layout, {responsive: true});
  });
}
document.addEventListener('DOMContentLoaded', renderFigures);
document.addEventListener('htmx:afterSettle', renderFigures);

// Keep each `_min` / `_max` slider pair from crossing.
document.addEventListener('input', function (e) {
  var el = e.target;
  var m = /^(.*)_(min|max)$/.exec(el.name || '');
  if (!m || el.type !== 'range') return;
  var other = document.getElementsByName(m[1] + (m[2] === 'min' ? '_max' : '_min'))[0];
  if (!other) return;
  if (m[2] === 'min' && +el.value > +other.value) el.value = other.value;
  if (m[2] === 'max' && +el.value < +other.value) el.value = other.value;
});
"#;

const PAGE_CSS: &str = r#"
body { background: #f4f5f7; }
.banner { color: white; background-color: #20283E; padding: 10px; border-radius: 5px; }
.overview { background-color: #DADADA; padding: 20px; border-radius: 5px; }
.filters { background-color: #20283E; padding: 20px; border-radius: 5px; }
.range-marks { position: relative; height: 1.4em; }
.range-marks span { position: absolute; transform: translateX(-50%); white-space: nowrap; }
.chart-panel { min-height: 420px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                style { (PreEscaped(PAGE_CSS)) }
                script src=(HTMX_JS) defer {}
                script src=(PLOTLY_JS) {}
                script { (PreEscaped(RENDER_FIGURES_JS)) }
            }
            body {
                (content)
            }
        }
    }
}
