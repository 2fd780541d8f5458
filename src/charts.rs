//! Synthetic water-quality series for the demo charts.
//!
//! None of these values come from a sensor; each call draws fresh noise.

use chrono::{DateTime, Duration, Local};
use rand::Rng;
use serde::Serialize;
use std::fmt;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize)]
pub struct TimePoint {
    pub time: DateTime<Local>,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayPoint {
    pub day: &'static str,
    pub value: f64,
}

/// Share of sites per risk band, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub ph: Vec<TimePoint>,
    pub turbidity: Vec<DayPoint>,
    pub chlorine: Vec<TimePoint>,
    pub risk: RiskDistribution,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Hourly pH readings for the last day, oldest first.
pub fn ph_series<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Local>) -> Vec<TimePoint> {
    (0..HOURS)
        .rev()
        .map(|i| {
            let wave = (i as f64 / 4.0).sin() * 0.5;
            let noise = rng.random::<f64>() * 0.2 - 0.1;
            TimePoint {
                time: now - Duration::hours(i),
                value: round_to(6.8 + wave + noise, 2),
            }
        })
        .collect()
}

/// Daily turbidity in NTU, never below 0.5.
pub fn turbidity_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<DayPoint> {
    WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, &day)| {
            let value = 2.0 + (i as f64).sin() * 1.5 + rng.random::<f64>();
            DayPoint {
                day,
                value: value.max(0.5),
            }
        })
        .collect()
}

/// Hourly free chlorine in mg/L for the last day, oldest first.
pub fn chlorine_series<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Local>) -> Vec<TimePoint> {
    (0..HOURS)
        .rev()
        .map(|i| {
            let wave = (i as f64 / 5.0).cos() * 0.15;
            let noise = rng.random::<f64>() * 0.05;
            TimePoint {
                time: now - Duration::hours(i),
                value: round_to(0.7 + wave + noise, 3),
            }
        })
        .collect()
}

/// Low/medium/high split. `high` takes the remainder and bottoms out at zero.
pub fn risk_distribution<R: Rng + ?Sized>(rng: &mut R) -> RiskDistribution {
    let low = 55 + (rng.random::<f64>() * 10.0).round() as u32;
    let medium = 30 + (rng.random::<f64>() * 8.0).round() as u32;
    RiskDistribution {
        low,
        medium,
        high: 100u32.saturating_sub(low + medium),
    }
}

pub fn sample<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Local>) -> ChartData {
    ChartData {
        ph: ph_series(rng, now),
        turbidity: turbidity_series(rng),
        chlorine: chlorine_series(rng, now),
        risk: risk_distribution(rng),
    }
}

fn summarize(f: &mut fmt::Formatter<'_>, label: &str, points: &[TimePoint]) -> fmt::Result {
    let values = points.iter().map(|p| p.value);
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    let latest = points.last().map(|p| p.value).unwrap_or(f64::NAN);
    writeln!(
        f,
        "{:<16} min {:>6.3}  max {:>6.3}  latest {:>6.3}",
        label, min, max, latest
    )
}

impl fmt::Display for ChartData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Water quality (demo data)")?;
        writeln!(f, "{}", "=".repeat(30))?;
        summarize(f, "pH (24h)", &self.ph)?;
        summarize(f, "Chlorine mg/L", &self.chlorine)?;

        writeln!(f, "\nTurbidity (NTU)")?;
        for point in &self.turbidity {
            let bar = "#".repeat((point.value * 4.0).round() as usize);
            writeln!(f, "  {}  {:>5.2}  {}", point.day, point.value, bar)?;
        }

        writeln!(f, "\nRisk distribution")?;
        writeln!(f, "  Low     {:>3}%", self.risk.low)?;
        writeln!(f, "  Medium  {:>3}%", self.risk.medium)?;
        write!(f, "  High    {:>3}%", self.risk.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_ph_series_shape() {
        let now = Local::now();
        let series = ph_series(&mut rng(), now);

        assert_eq!(series.len(), 24);
        assert_eq!(series.last().unwrap().time, now);
        assert_eq!(series[0].time, now - Duration::hours(23));
        for point in &series {
            assert!((6.2..=7.4).contains(&point.value), "pH {}", point.value);
            assert_eq!(point.value, round_to(point.value, 2));
        }
    }

    #[test]
    fn test_turbidity_floor_and_days() {
        let series = turbidity_series(&mut rng());
        let days: Vec<_> = series.iter().map(|p| p.day).collect();
        assert_eq!(days, WEEKDAYS.to_vec());
        assert!(series.iter().all(|p| p.value >= 0.5 && p.value <= 4.5));
    }

    #[test]
    fn test_chlorine_range() {
        let series = chlorine_series(&mut rng(), Local::now());
        assert_eq!(series.len(), 24);
        assert!(series.iter().all(|p| p.value >= 0.55 && p.value <= 0.9));
    }

    #[test]
    fn test_risk_distribution_bounds() {
        let mut rng = rng();
        for _ in 0..200 {
            let risk = risk_distribution(&mut rng);
            assert!((55..=65).contains(&risk.low));
            assert!((30..=38).contains(&risk.medium));
            if risk.low + risk.medium <= 100 {
                assert_eq!(risk.low + risk.medium + risk.high, 100);
            } else {
                assert_eq!(risk.high, 0);
            }
        }
    }

    #[test]
    fn test_seeded_sample_is_reproducible() {
        let now = Local::now();
        let a = sample(&mut rng(), now);
        let b = sample(&mut rng(), now);
        assert_eq!(a.risk, b.risk);
        assert_eq!(a.ph[5].value, b.ph[5].value);
    }

    #[test]
    fn test_display_mentions_every_chart() {
        let text = sample(&mut rng(), Local::now()).to_string();
        assert!(text.contains("pH"));
        assert!(text.contains("Chlorine"));
        assert!(text.contains("Turbidity"));
        assert!(text.contains("Risk distribution"));
    }
}
