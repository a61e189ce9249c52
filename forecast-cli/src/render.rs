use std::fmt::Write as _;

use forecast_core::{DerivedView, ForecastPayload};

const NO_DATA: &str = "No data available";

/// Render current conditions, the hourly strip, the next days and today's highlights.
pub fn render(payload: &ForecastPayload, view: &DerivedView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", payload.location.display_name());
    let _ = writeln!(out, "{}", view.formatted_local_date_time);
    let _ = writeln!(
        out,
        "{}  {}°C",
        payload.current.condition.text,
        payload.current.temperature_c
    );

    out.push('\n');
    render_hourly(&mut out, view);
    out.push('\n');
    render_next_days(&mut out, payload, view);
    out.push('\n');
    render_highlights(&mut out, payload, view);

    out
}

fn render_hourly(out: &mut String, view: &DerivedView) {
    let _ = writeln!(out, "Hourly");

    if view.hourly_window.is_empty() {
        let _ = writeln!(out, "  {NO_DATA}");
        return;
    }

    for hour in &view.hourly_window {
        let _ = writeln!(
            out,
            "  {:<6} {:>4}°C  {}",
            hour.clock(),
            round_up(hour.temperature_c),
            hour.condition.text
        );
    }
}

fn render_next_days(out: &mut String, payload: &ForecastPayload, view: &DerivedView) {
    let _ = writeln!(out, "Next days");

    let upcoming: Vec<_> = payload.days().iter().enumerate().skip(1).collect();
    if upcoming.is_empty() {
        let _ = writeln!(out, "  {NO_DATA}");
        return;
    }

    for (idx, day) in upcoming {
        let label = view.day_label(idx).unwrap_or(day.date.as_str());
        let _ = writeln!(out, "  {:<18} {}", label, day.day.condition.text);
    }
}

fn render_highlights(out: &mut String, payload: &ForecastPayload, view: &DerivedView) {
    let current = &payload.current;
    let uv = current.uv_index.map_or_else(|| "n/a".to_string(), |uv| uv.to_string());

    let _ = writeln!(out, "Today's Highlights");
    let _ = writeln!(out, "  UV Index - {uv} ({})", view.uv_category);
    let _ = writeln!(out, "  Wind speed - {} Km/h", current.wind_kph);

    if let Some(today) = payload.day(0) {
        let _ = writeln!(out, "  Sunrise - {}", today.astro.sunrise);
        let _ = writeln!(out, "  Sunset - {}", today.astro.sunset);
    }

    let _ = writeln!(out, "  Humidity - {} %", current.humidity_pct);
    let _ = writeln!(out, "  Visibility - {} Km", current.visibility_km);
    let _ = writeln!(
        out,
        "  Air Quality - {} ({})",
        round_up(view.air_quality_index()),
        view.air_quality_category()
    );
}

/// Ceiling without a signed zero, so -0.4 shows as "0" rather than "-0".
fn round_up(value: f64) -> f64 {
    let ceiled = value.ceil();
    if ceiled == 0.0 { 0.0 } else { ceiled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::WindowStrategy;

    fn payload() -> ForecastPayload {
        let hours = |date: &str| -> Vec<serde_json::Value> {
            (0..24)
                .map(|h| {
                    serde_json::json!({
                        "time": format!("{date} {h:02}:00"),
                        "temp_c": 12.3,
                        "condition": { "text": "Clear", "icon": "n.png" }
                    })
                })
                .collect()
        };
        let day = |date: &str, text: &str| {
            serde_json::json!({
                "date": date,
                "day": { "condition": { "text": text, "icon": "d.png" } },
                "astro": { "sunrise": "07:12 AM", "sunset": "07:24 PM" },
                "hour": hours(date)
            })
        };

        serde_json::from_value(serde_json::json!({
            "location": { "name": "Lisbon", "country": "Portugal", "localtime": "2024-03-15 9:05" },
            "current": {
                "temp_c": 16.2,
                "condition": { "text": "Sunny", "icon": "s.png" },
                "uv": 4.0,
                "wind_kph": 13.0,
                "humidity": 72,
                "vis_km": 10.0,
                "air_quality": { "pm2_5": 12.1 }
            },
            "forecast": { "forecastday": [
                day("2024-03-15", "Sunny"),
                day("2024-03-16", "Light rain"),
                day("2024-03-17", "Cloudy")
            ] }
        }))
        .expect("fixture should parse")
    }

    #[test]
    fn renders_all_sections() {
        let payload = payload();
        let view = DerivedView::derive(&payload, 21, WindowStrategy::default());
        let text = render(&payload, &view);

        assert!(text.starts_with("Lisbon, Portugal\n15-03-2024, 09:05\nSunny  16.2°C\n"));
        assert!(text.contains("  21:00    13°C  Clear"));
        assert!(text.contains("Saturday, 16-03"));
        assert!(text.contains("Light rain"));
        assert!(text.contains("Sunday, 17-03"));
        assert!(text.contains("UV Index - 4 (Moderate)"));
        assert!(text.contains("Wind speed - 13 Km/h"));
        assert!(text.contains("Sunrise - 07:12 AM"));
        assert!(text.contains("Humidity - 72 %"));
        assert!(text.contains("Visibility - 10 Km"));
        assert!(text.contains("Air Quality - 49 (Good)"));
        assert!(!text.contains(NO_DATA));

        let hourly_lines = text.lines().filter(|l| l.contains("°C  Clear")).count();
        assert_eq!(hourly_lines, 3 + 12);
    }

    #[test]
    fn empty_window_says_no_data() {
        let payload = payload();
        let view = DerivedView::derive(&payload, 99, WindowStrategy::default());
        let text = render(&payload, &view);

        assert!(text.contains(&format!("Hourly\n  {NO_DATA}\n")));
    }

    #[test]
    fn missing_readings_render_defaults() {
        let mut payload = payload();
        payload.current.uv_index = None;
        payload.current.air_quality = None;
        let view = DerivedView::derive(&payload, 9, WindowStrategy::default());
        let text = render(&payload, &view);

        assert!(text.contains("UV Index - n/a (Extreme)"));
        assert!(text.contains("Air Quality - 0 ()"));
    }

    #[test]
    fn temperatures_just_below_freezing_have_no_signed_zero() {
        let mut payload = payload();
        payload.current.temperature_c = -0.4;
        for day in &mut payload.forecast.days {
            for hour in &mut day.hours {
                hour.temperature_c = -0.4;
            }
        }
        let view = DerivedView::derive(&payload, 11, WindowStrategy::default());
        let text = render(&payload, &view);

        assert!(text.contains("Sunny  -0.4°C"));
        assert!(text.contains("  11:00     0°C  Clear"));
        assert!(!text.contains("-0°C"));
    }

    #[test]
    fn round_up_matches_ceiling() {
        assert_eq!(round_up(12.3).to_string(), "13");
        assert_eq!(round_up(-0.4).to_string(), "0");
        assert_eq!(round_up(-1.5).to_string(), "-1");
        assert_eq!(round_up(0.0).to_string(), "0");
    }
}
