use contracts::dashboards::d100_revenue_summary::{donut_arcs, VisitorShare};
use leptos::prelude::*;
use std::f64::consts::PI;

const SIZE: f64 = 180.0;
const STROKE_WIDTH: f64 = 25.0;

/// Ring chart of visitor shares with the visitor total in the middle
#[component]
pub fn DonutChart(shares: Vec<VisitorShare>, visitors: u32) -> impl IntoView {
    let radius = (SIZE - STROKE_WIDTH) / 2.0;
    let circumference = 2.0 * PI * radius;
    let center = SIZE / 2.0;
    let rotate = format!("rotate(-90 {center} {center})");

    let arcs = donut_arcs(&shares, circumference)
        .into_iter()
        .map(|arc| {
            view! {
                <circle
                    cx=center
                    cy=center
                    r=radius
                    fill="transparent"
                    stroke=arc.color
                    stroke-width=STROKE_WIDTH
                    stroke-dasharray=format!("{} {}", arc.length, circumference)
                    stroke-dashoffset=circumference - arc.offset
                    transform=rotate.clone()
                    class="donut-chart__arc"
                    data-label=format!("{}: {:.1}%", arc.label, arc.percent)
                ></circle>
            }
        })
        .collect_view();

    view! {
        <div class="donut-chart" style=format!("width: {SIZE}px; height: {SIZE}px")>
            <svg width=SIZE height=SIZE viewBox=format!("0 0 {SIZE} {SIZE}")>
                <circle
                    cx=center
                    cy=center
                    r=radius
                    fill="transparent"
                    stroke="#e6e6e6"
                    stroke-width=STROKE_WIDTH
                />
                {arcs}
            </svg>
            <div class="donut-chart__center">
                <span class="donut-chart__value">{visitors}</span>
                <span class="donut-chart__label">"Visitors"</span>
            </div>
        </div>
    }
}
