//! 차트용 스펙트럼 곡선 샘플링.

use serde::{Deserialize, Serialize};

use super::ground_params::{SpectrumParams, VerticalSpectrumParams};
use super::response_spectrum::{
    design_ordinate, elastic_ordinate, vertical_ordinate, ELASTIC_PERIOD_LIMIT_S,
};

/// 샘플링할 스펙트럼 종류.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveKind {
    Elastic {
        params: SpectrumParams,
        damping_ratio_pct: f64,
    },
    Design {
        params: SpectrumParams,
        behaviour_factor: f64,
        lower_bound_factor: f64,
    },
    Vertical {
        params: VerticalSpectrumParams,
        damping_ratio_pct: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    pub period_s: f64,
    pub ordinate: f64,
}

/// 0 ~ t_max 구간을 steps 등분해 좌표를 계산한다.
/// 탄성/수직 스펙트럼은 4 s 를 넘는 점을 건너뛴다.
pub fn sample(kind: CurveKind, a_g: f64, t_max: f64, steps: usize) -> Vec<SpectrumPoint> {
    let steps = steps.max(1);
    (0..=steps)
        .filter_map(|i| {
            let period_s = t_max * i as f64 / steps as f64;
            let ordinate = match kind {
                CurveKind::Elastic {
                    params,
                    damping_ratio_pct,
                } => elastic_ordinate(period_s, a_g, &params, damping_ratio_pct).ok()?,
                CurveKind::Design {
                    params,
                    behaviour_factor,
                    lower_bound_factor,
                } => design_ordinate(
                    period_s,
                    a_g,
                    &params,
                    behaviour_factor,
                    lower_bound_factor,
                ),
                CurveKind::Vertical {
                    params,
                    damping_ratio_pct,
                } => vertical_ordinate(period_s, a_g, &params, damping_ratio_pct).ok()?,
            };
            Some(SpectrumPoint { period_s, ordinate })
        })
        .collect()
}

/// 탄성 곡선이 정의되는 최대 샘플 주기.
pub fn elastic_t_max(requested: f64) -> f64 {
    requested.min(ELASTIC_PERIOD_LIMIT_S)
}
