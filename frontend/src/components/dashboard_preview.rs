use log::warn;
use yew::prelude::*;

use crate::charts::context::ChartsContext;
use crate::charts::options::ChartOptions;
use crate::charts::registry::ChartData;
use crate::charts::trend::update_trend_badge;

const REVIEWS_SPARKLINE: &str = "preview-reviews-sparkline";
const REQUESTS_BAR: &str = "preview-requests-bar";
const RATINGS_DOUGHNUT: &str = "preview-ratings-doughnut";
const CHART_IDS: [&str; 3] = [REVIEWS_SPARKLINE, REQUESTS_BAR, RATINGS_DOUGHNUT];

const REVIEWS_TREND: &str = "preview-reviews-trend";
const RATING_TREND: &str = "preview-rating-trend";
const CLICKS_TREND: &str = "preview-clicks-trend";

const WEEKLY_REVIEWS: [f64; 8] = [4.0, 6.0, 5.0, 9.0, 12.0, 11.0, 15.0, 18.0];
const DAILY_REQUESTS: [(&str, f64); 7] = [
    ("Mon", 42.0),
    ("Tue", 38.0),
    ("Wed", 51.0),
    ("Thu", 47.0),
    ("Fri", 63.0),
    ("Sat", 29.0),
    ("Sun", 12.0),
];
const RATING_SPLIT: [(&str, f64); 5] = [("5★", 142.0), ("4★", 31.0), ("3★", 6.0), ("2★", 2.0), ("1★", 3.0)];
const AVERAGE_RATING: (f64, f64) = (4.71, 4.62);

/// Star-rating colours, five stars first.
const RATING_CHART_OPTIONS: &str = r##"{
    "colors": ["#FBBF24", "#FCD34D", "#94A3B8", "#F97316", "#F43F5E"],
    "cutout": 0.55
}"##;

fn rating_chart_options() -> ChartOptions {
    let options = ChartOptions::from_json(RATING_CHART_OPTIONS).unwrap_or_else(|err| {
        warn!("rating chart options ignored: {}", err);
        ChartOptions::default()
    });
    options.value_format(|count| format!("{:.0} reviews", count))
}

/// Week-over-week change in percent, `None` when there is nothing to compare against.
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

fn last_two(values: &[f64]) -> Option<(f64, f64)> {
    match values {
        [.., previous, current] => Some((*previous, *current)),
        _ => None,
    }
}

/// Sample analytics panel on the home page, drawn with the shared chart registry.
#[function_component(DashboardPreview)]
pub fn dashboard_preview() -> Html {
    let charts = use_context::<ChartsContext>();

    use_effect_with_deps(
        move |_| {
            match &charts {
                Some(charts) => {
                    let mut registry = charts.registry();
                    registry.create_sparkline(
                        REVIEWS_SPARKLINE,
                        ChartData::from_values(WEEKLY_REVIEWS.to_vec()),
                        ChartOptions::default(),
                    );
                    registry.create_bar_chart(
                        REQUESTS_BAR,
                        ChartData::new(
                            DAILY_REQUESTS.iter().map(|(day, _)| *day),
                            DAILY_REQUESTS.iter().map(|(_, sent)| *sent).collect(),
                        ),
                        ChartOptions::default().title("Review requests sent"),
                    );
                    registry.create_doughnut_chart(
                        RATINGS_DOUGHNUT,
                        ChartData::new(
                            RATING_SPLIT.iter().map(|(stars, _)| *stars),
                            RATING_SPLIT.iter().map(|(_, count)| *count).collect(),
                        ),
                        rating_chart_options(),
                    );
                }
                None => warn!("dashboard preview rendered without a chart registry"),
            }

            let reviews = last_two(&WEEKLY_REVIEWS).and_then(|(prev, cur)| percent_change(prev, cur));
            update_trend_badge(REVIEWS_TREND, reviews);
            update_trend_badge(RATING_TREND, percent_change(AVERAGE_RATING.1, AVERAGE_RATING.0));
            // Click tracking starts after the first full week.
            update_trend_badge(CLICKS_TREND, None);

            move || {
                if let Some(charts) = charts {
                    let mut registry = charts.registry();
                    for id in CHART_IDS {
                        registry.destroy_chart(id);
                    }
                }
            }
        },
        (),
    );

    html! {
        <section class="dashboard-preview">
            <h2>{"See every review as it lands"}</h2>
            <p class="dashboard-preview-subtitle">{"A live look at the MoreStars dashboard, with sample data from a local HVAC company."}</p>
            <div class="dashboard-grid">
                <div class="dashboard-card">
                    <div class="dashboard-card-header">
                        <h3>{"New reviews"}</h3>
                        <span id={REVIEWS_TREND} class="trend-badge neutral">{"--"}</span>
                    </div>
                    <canvas id={REVIEWS_SPARKLINE} width="320" height="90"></canvas>
                </div>
                <div class="dashboard-card">
                    <div class="dashboard-card-header">
                        <h3>{"Average rating"}</h3>
                        <span id={RATING_TREND} class="trend-badge neutral">{"--"}</span>
                    </div>
                    <p class="dashboard-big-number">{ format!("{:.1} ★", AVERAGE_RATING.0) }</p>
                </div>
                <div class="dashboard-card">
                    <div class="dashboard-card-header">
                        <h3>{"Link clicks"}</h3>
                        <span id={CLICKS_TREND} class="trend-badge neutral">{"--"}</span>
                    </div>
                    <p class="dashboard-big-number">{"214"}</p>
                </div>
                <div class="dashboard-card wide">
                    <canvas id={REQUESTS_BAR} width="640" height="260"></canvas>
                </div>
                <div class="dashboard-card wide">
                    <h3>{"Rating breakdown"}</h3>
                    <canvas id={RATINGS_DOUGHNUT} width="420" height="240"></canvas>
                </div>
            </div>
            <style>
                {r#"
                .dashboard-preview {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    text-align: center;
                }
                .dashboard-preview h2 {
                    font-size: 2.5rem;
                    background: linear-gradient(45deg, #fff, #FBBF24);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .dashboard-preview-subtitle {
                    color: #999;
                    margin-bottom: 2.5rem;
                }
                .dashboard-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.25rem;
                }
                .dashboard-card {
                    background: #fff;
                    color: #1a1a1a;
                    border-radius: 12px;
                    padding: 1.25rem;
                    text-align: left;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .dashboard-card.wide {
                    grid-column: span 3;
                }
                .dashboard-card canvas {
                    max-width: 100%;
                }
                .dashboard-card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .dashboard-card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1rem;
                    color: #555;
                }
                .dashboard-big-number {
                    font-size: 2.2rem;
                    font-weight: 700;
                    margin: 0.5rem 0 0;
                }
                .trend-badge {
                    font-size: 0.8rem;
                    font-weight: 600;
                    padding: 0.2rem 0.5rem;
                    border-radius: 999px;
                }
                .trend-badge.positive {
                    color: #047857;
                    background: #D1FAE5;
                }
                .trend-badge.negative {
                    color: #BE123C;
                    background: #FFE4E6;
                }
                .trend-badge.neutral {
                    color: #475569;
                    background: #E2E8F0;
                }
                @media (max-width: 800px) {
                    .dashboard-grid {
                        grid-template-columns: 1fr;
                    }
                    .dashboard-card.wide {
                        grid-column: span 1;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_compares_against_previous() {
        assert_eq!(percent_change(10.0, 12.0), Some(20.0));
        assert_eq!(percent_change(4.0, 3.0), Some(-25.0));
        assert_eq!(percent_change(0.0, 5.0), None);
        assert_eq!(percent_change(f64::NAN, 5.0), None);
    }

    #[test]
    fn sample_reviews_trend_up() {
        let (previous, current) = last_two(&WEEKLY_REVIEWS).expect("two weeks of data");
        assert!(percent_change(previous, current).is_some_and(|change| change > 0.0));
        assert_eq!(last_two(&[1.0]), None);
    }

    #[test]
    fn rating_options_parse_with_a_colour_per_star() {
        let options = rating_chart_options();
        assert_eq!(options.colors.as_ref().map(Vec::len), Some(RATING_SPLIT.len()));
        assert_eq!(options.cutout, Some(0.55));
        let format = options.value_format.expect("formatter");
        assert_eq!(format.format(142.0), "142 reviews");
    }
}
