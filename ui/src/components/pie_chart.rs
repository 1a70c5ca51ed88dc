use std::f64::consts::{FRAC_PI_2, TAU};

use yew::prelude::*;

use crate::utils::format_area;

const RADIUS: f64 = 80.0;
const CENTER: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: AttrValue,
    pub value: f64,
    pub color: &'static str,
}

/// One drawable SVG shape per non-empty slice.
#[derive(Debug, Clone, PartialEq)]
enum Shape {
    /// Covers the whole disc.
    Full,
    /// SVG path data for a wedge.
    Wedge(String),
}

fn point(angle: f64) -> (f64, f64) {
    (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
}

/// Wedges starting at twelve o'clock, clockwise. Zero and negative values
/// draw nothing.
fn shapes(values: &[f64]) -> Vec<Option<Shape>> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = -FRAC_PI_2;

    values
        .iter()
        .map(|value| {
            if *value <= 0.0 || total <= 0.0 {
                return None;
            }
            let fraction = value / total;
            if fraction >= 1.0 - f64::EPSILON {
                return Some(Shape::Full);
            }
            let end = start + fraction * TAU;
            let (x0, y0) = point(start);
            let (x1, y1) = point(end);
            let large_arc = if fraction > 0.5 { 1 } else { 0 };
            start = end;
            Some(Shape::Wedge(format!(
                "M {CENTER} {CENTER} L {x0:.3} {y0:.3} \
                 A {RADIUS} {RADIUS} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
            )))
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub slices: Vec<PieSlice>,
}

#[function_component]
pub fn PieChart(props: &Props) -> Html {
    let values: Vec<f64> = props.slices.iter().map(|s| s.value).collect();
    let drawn = shapes(&values);
    let empty = drawn.iter().all(Option::is_none);

    html! {
        <div class="flex flex-col items-center gap-2">
            <h4 class="text-sm font-semibold text-neutral-900 dark:text-neutral-100">
                {&props.title}
            </h4>
            <svg viewBox="0 0 200 200" class="w-40 h-40">
                if empty {
                    <circle
                        cx={CENTER.to_string()}
                        cy={CENTER.to_string()}
                        r={RADIUS.to_string()}
                        fill="#e5e5e5"
                    />
                }
                {for props.slices.iter().zip(drawn).map(|(slice, shape)| match shape {
                    Some(Shape::Full) => html! {
                        <circle
                            cx={CENTER.to_string()}
                            cy={CENTER.to_string()}
                            r={RADIUS.to_string()}
                            fill={slice.color}
                        >
                            <title>{&slice.label}</title>
                        </circle>
                    },
                    Some(Shape::Wedge(d)) => html! {
                        <path {d} fill={slice.color}>
                            <title>{&slice.label}</title>
                        </path>
                    },
                    None => html! {},
                })}
            </svg>
            <ul class="text-xs space-y-1">
                {for props.slices.iter().map(|slice| html! {
                    <li class="flex items-center gap-2 text-neutral-700 dark:text-neutral-300">
                        <span
                            class="inline-block w-3 h-3 rounded-sm"
                            style={format!("background-color: {};", slice.color)}
                        />
                        {format!("{}: {}", slice.label, format_area(slice.value))}
                    </li>
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_nonzero_value_fills_disc() {
        let drawn = shapes(&[0.0, 12.5]);
        assert_eq!(drawn, vec![None, Some(Shape::Full)]);
    }

    #[test]
    fn nothing_to_draw_when_all_zero() {
        assert!(shapes(&[0.0, 0.0]).iter().all(Option::is_none));
    }

    #[test]
    fn larger_slice_uses_large_arc_flag() {
        let drawn = shapes(&[3.0, 1.0]);
        match (&drawn[0], &drawn[1]) {
            (Some(Shape::Wedge(big)), Some(Shape::Wedge(small))) => {
                assert!(big.contains(" 0 1 1 "));
                assert!(small.contains(" 0 0 1 "));
            }
            other => panic!("unexpected shapes: {other:?}"),
        }
    }

    #[test]
    fn first_wedge_starts_at_twelve_o_clock() {
        let drawn = shapes(&[1.0, 1.0]);
        let Some(Shape::Wedge(d)) = &drawn[0] else {
            panic!("expected a wedge");
        };
        assert!(d.starts_with("M 100 100 L 100.000 20.000"));
    }
}
