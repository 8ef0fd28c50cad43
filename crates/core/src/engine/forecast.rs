use crate::domain::analytics::{DemandForecastResponse, HourlyOrders};
use crate::engine::DemandForecaster;

/// Largest `hours_ahead` the HTTP layer accepts; thirty days of hourly buckets.
pub const MAX_FORECAST_HOURS: u32 = 720;
pub const DEFAULT_FORECAST_HOURS: u32 = 24;

const BASE_ORDERS: u32 = 10;
const CYCLE_HOURS: u32 = 12;
const PEAK_HOURS: [u32; 4] = [12, 13, 19, 20];
const CONFIDENCE: f64 = 0.82;

/// Saw-tooth series `10 + (hour mod 12)` with fixed lunch and dinner peaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicDemandForecaster;

pub fn hourly_series(hours_ahead: u32) -> Vec<HourlyOrders> {
    (0..hours_ahead)
        .map(|hour| HourlyOrders {
            hour,
            orders: BASE_ORDERS + hour % CYCLE_HOURS,
        })
        .collect()
}

#[async_trait::async_trait]
impl DemandForecaster for CyclicDemandForecaster {
    async fn forecast(
        &self,
        restaurant_id: i64,
        hours_ahead: u32,
    ) -> anyhow::Result<DemandForecastResponse> {
        Ok(DemandForecastResponse {
            restaurant_id,
            forecast_hours: hours_ahead,
            predicted_orders: hourly_series(hours_ahead),
            peak_hours: PEAK_HOURS.to_vec(),
            confidence: CONFIDENCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_wraps_every_twelve_hours() {
        let series = hourly_series(26);
        assert_eq!(series.len(), 26);
        assert_eq!(series[0].orders, 10);
        assert_eq!(series[11].orders, 21);
        assert_eq!(series[12].orders, 10);
        assert_eq!(series[25], HourlyOrders { hour: 25, orders: 11 });
    }

    #[test]
    fn zero_hours_is_empty() {
        assert!(hourly_series(0).is_empty());
    }

    #[tokio::test]
    async fn peak_hours_do_not_depend_on_horizon() {
        let short = CyclicDemandForecaster.forecast(1, 3).await.unwrap();
        let long = CyclicDemandForecaster.forecast(1, 48).await.unwrap();
        assert_eq!(short.peak_hours, vec![12, 13, 19, 20]);
        assert_eq!(short.peak_hours, long.peak_hours);
        assert_eq!(long.forecast_hours, 48);
        assert_eq!(long.confidence, 0.82);
    }
}
