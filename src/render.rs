use crate::datamodel::Reading;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One block character per reading, scaled over the decibel range of the
/// slice. Stateless; the poller owns the data.
pub fn sparkline(readings: &[Reading]) -> String {
    let Some(min) = readings.iter().map(|reading| reading.decibel).min() else {
        return String::new();
    };
    let max = readings
        .iter()
        .map(|reading| reading.decibel)
        .max()
        .unwrap_or(min);
    // Saturating arithmetic: the decoded decibel range is unbounded and a
    // pathological spread would overflow a plain subtraction.
    let span = max.saturating_sub(min).max(1) as f64;

    readings
        .iter()
        .map(|reading| {
            let ratio = reading.decibel.saturating_sub(min) as f64 / span;
            let index = (ratio * (BARS.len() - 1) as f64).round() as usize;
            BARS[index.min(BARS.len() - 1)]
        })
        .collect()
}

pub fn summary(readings: &[Reading]) -> String {
    match readings.last() {
        None => "no readings yet".to_string(),
        Some(latest) => format!(
            "{} readings | latest {} dB from '{}' at t={}",
            readings.len(),
            latest.decibel,
            latest.partition,
            latest.timestamp
        ),
    }
}
