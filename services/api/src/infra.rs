use abm_scoring::scoring::{ContactScorer, ScoringPreset};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) scorer: Arc<ContactScorer>,
    pub(crate) report_top_n: usize,
}

pub(crate) fn parse_preset(raw: &str) -> Result<ScoringPreset, String> {
    ScoringPreset::parse(raw).ok_or_else(|| {
        format!("unknown preset '{raw}' (expected champion_first or economic_buyer_first)")
    })
}

pub(crate) fn parse_sub_score(raw: &str) -> Result<f32, String> {
    let value = raw
        .trim()
        .parse::<f32>()
        .map_err(|err| format!("failed to parse '{raw}' as a score ({err})"))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("score {value} must be between 0 and 100"));
    }
    Ok(value)
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    AppState {
        readiness: Arc::new(AtomicBool::new(true)),
        metrics: Arc::new(recorder.handle()),
        scorer: Arc::new(ContactScorer::default()),
        report_top_n: 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_scores_are_range_checked() {
        assert_eq!(parse_sub_score(" 72.5 "), Ok(72.5));
        assert!(parse_sub_score("101").is_err());
        assert!(parse_sub_score("-1").is_err());
        assert!(parse_sub_score("high").is_err());
    }

    #[test]
    fn presets_parse_for_cli_flags() {
        assert!(parse_preset("economic-buyer-first").is_ok());
        assert!(parse_preset("legacy").is_err());
    }
}
