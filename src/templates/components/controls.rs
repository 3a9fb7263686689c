use crate::data::filter::{Range, RangeControl};
use maud::{html, Markup};

/// Two range inputs named `{name}_min` / `{name}_max` plus the tick labels.
pub fn range_control(
    label: &str,
    name: &str,
    control: RangeControl,
    current: Range,
    marks: &[(f64, &str)],
) -> Markup {
    let RangeControl { domain, step } = control;
    html! {
        div class="col" {
            h5 style="font-weight: bold; color: white;" { (label) }
            div class="range-control" {
                label class="form-label text-white-50 small" for=(format!("{name}_min")) { "Min" }
                input
                    type="range"
                    class="form-range"
                    id=(format!("{name}_min"))
                    name=(format!("{name}_min"))
                    min=(domain.min)
                    max=(domain.max)
                    step=(step)
                    value=(current.min);
                label class="form-label text-white-50 small" for=(format!("{name}_max")) { "Max" }
                input
                    type="range"
                    class="form-range"
                    id=(format!("{name}_max"))
                    name=(format!("{name}_max"))
                    min=(domain.min)
                    max=(domain.max)
                    step=(step)
                    value=(current.max);
                div class="range-marks text-white small" {
                    @for (at, mark) in marks {
                        span style=(format!("left: {}%;", mark_offset(domain, *at))) { (mark) }
                    }
                }
            }
        }
    }
}

/// Dropdown whose empty option means "no filter".
pub fn select_control(
    label: &str,
    name: &str,
    placeholder: &str,
    options: &[&str],
    selected: Option<&str>,
) -> Markup {
    html! {
        div class="col" {
            h5 style="font-weight: bold; color: white;" { (label) }
            select class="form-select" id=(name) name=(name) {
                option value="" selected[selected.is_none()] { (placeholder) }
                @for choice in options {
                    option value=(choice) selected[selected == Some(*choice)] { (choice) }
                }
            }
        }
    }
}

fn mark_offset(domain: Range, at: f64) -> f64 {
    let span = domain.max - domain.min;
    if span <= 0.0 {
        return 0.0;
    }
    ((at - domain.min) / span * 100.0).clamp(0.0, 100.0)
}
