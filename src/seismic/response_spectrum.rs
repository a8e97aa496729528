//! EN 1998-1 3.2.2 응답스펙트럼 좌표 계산.
//! 가속도 단위는 입력 a_g 와 동일하게 반환된다.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::ground_params::{GroundType, SpectrumParams, SpectrumType, VerticalSpectrumParams};

/// 탄성 스펙트럼이 정의되는 최대 주기(s)
pub const ELASTIC_PERIOD_LIMIT_S: f64 = 4.0;
/// 점성감쇠 보정계수 η 의 하한
pub const MIN_DAMPING_CORRECTION: f64 = 0.55;
/// 기본 감쇠비(%)
pub const DEFAULT_DAMPING_RATIO_PCT: f64 = 5.0;

const HORIZONTAL_AMPLIFICATION: f64 = 2.5;
const VERTICAL_AMPLIFICATION: f64 = 3.0;

/// 스펙트럼 계산 오류.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpectrumError {
    #[error("주기 {period} s 가 탄성 스펙트럼 정의 범위({limit} s)를 벗어났습니다")]
    PeriodOutOfRange { period: f64, limit: f64 },
}

/// 주기가 속한 스펙트럼 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectrumBranch {
    /// T ≤ 0
    ZeroPeriod,
    /// 0 < T ≤ T_B 선형 증가 구간
    Ramp,
    /// T_B < T ≤ T_C 일정 가속도
    ConstantAcceleration,
    /// T_C < T ≤ T_D 일정 속도
    ConstantVelocity,
    /// T > T_D 일정 변위
    ConstantDisplacement,
}

/// 주기 T 가 어느 구간에 속하는지 판정한다. 경계값은 안쪽(짧은 주기) 구간에 속한다.
pub fn branch(period: f64, t_b: f64, t_c: f64, t_d: f64) -> SpectrumBranch {
    if period <= 0.0 {
        SpectrumBranch::ZeroPeriod
    } else if period <= t_b {
        SpectrumBranch::Ramp
    } else if period <= t_c {
        SpectrumBranch::ConstantAcceleration
    } else if period <= t_d {
        SpectrumBranch::ConstantVelocity
    } else {
        SpectrumBranch::ConstantDisplacement
    }
}

impl SpectrumParams {
    /// 이 계수 행 기준으로 주기 T 의 구간을 판정한다.
    pub fn branch(&self, period: f64) -> SpectrumBranch {
        branch(period, self.t_b, self.t_c, self.t_d)
    }
}

/// 3.2.2.2(3) 감쇠 보정계수 η = sqrt(10 / (5 + ξ)) ≥ 0.55. ξ 는 %.
pub fn damping_correction(damping_ratio_pct: f64) -> f64 {
    (10.0 / (5.0 + damping_ratio_pct))
        .sqrt()
        .max(MIN_DAMPING_CORRECTION)
}

// NaN 주기도 정의 범위 밖으로 본다.
fn check_elastic_period(period: f64) -> Result<(), SpectrumError> {
    if period.is_nan() || period > ELASTIC_PERIOD_LIMIT_S {
        warn!(period, "period beyond elastic spectrum limit");
        return Err(SpectrumError::PeriodOutOfRange {
            period,
            limit: ELASTIC_PERIOD_LIMIT_S,
        });
    }
    Ok(())
}

/// 3.2.2.2 수평 탄성 응답스펙트럼 S_e(T).
pub fn elastic_ordinate(
    period: f64,
    a_g: f64,
    params: &SpectrumParams,
    damping_ratio_pct: f64,
) -> Result<f64, SpectrumError> {
    check_elastic_period(period)?;
    let SpectrumParams { s, t_b, t_c, t_d } = *params;
    let eta = damping_correction(damping_ratio_pct);
    let plateau = a_g * s * eta * HORIZONTAL_AMPLIFICATION;
    let band = params.branch(period);
    let value = match band {
        SpectrumBranch::ZeroPeriod => a_g,
        SpectrumBranch::Ramp => {
            a_g * s * (1.0 + period / t_b * (eta * HORIZONTAL_AMPLIFICATION - 1.0))
        }
        SpectrumBranch::ConstantAcceleration => plateau,
        SpectrumBranch::ConstantVelocity => plateau * (t_c / period),
        SpectrumBranch::ConstantDisplacement => plateau * (t_c * t_d / period.powi(2)),
    };
    debug!(period, a_g, ?band, value, "elastic spectrum");
    Ok(value)
}

/// 3.2.2.5 탄성해석용 설계스펙트럼 S_d(T).
/// T_C 이후에는 β·a_g 하한으로 잘린다.
pub fn design_ordinate(
    period: f64,
    a_g: f64,
    params: &SpectrumParams,
    behaviour_factor: f64,
    lower_bound_factor: f64,
) -> f64 {
    let SpectrumParams { s, t_b, t_c, t_d } = *params;
    let q = behaviour_factor;
    let beta = lower_bound_factor;
    let band = params.branch(period);
    let value = match band {
        SpectrumBranch::ZeroPeriod => a_g,
        SpectrumBranch::Ramp => {
            a_g * s * (2.0 / 3.0 + period / t_b * (HORIZONTAL_AMPLIFICATION / q - 2.0 / 3.0))
        }
        SpectrumBranch::ConstantAcceleration => a_g * s * HORIZONTAL_AMPLIFICATION / q,
        SpectrumBranch::ConstantVelocity => {
            a_g * beta.max(s * HORIZONTAL_AMPLIFICATION / q * (t_c / period))
        }
        SpectrumBranch::ConstantDisplacement => {
            a_g * beta.max(s * HORIZONTAL_AMPLIFICATION / q * (t_c * t_d / period.powi(2)))
        }
    };
    debug!(period, a_g, q, beta, ?band, value, "design spectrum");
    value
}

/// 3.2.2.3 수직 탄성 응답스펙트럼 S_ve(T).
pub fn vertical_ordinate(
    period: f64,
    a_g: f64,
    params: &VerticalSpectrumParams,
    damping_ratio_pct: f64,
) -> Result<f64, SpectrumError> {
    check_elastic_period(period)?;
    let VerticalSpectrumParams {
        avg_ratio,
        t_b,
        t_c,
        t_d,
    } = *params;
    let a_vg = avg_ratio * a_g;
    let eta = damping_correction(damping_ratio_pct);
    let plateau = a_vg * eta * VERTICAL_AMPLIFICATION;
    let band = branch(period, t_b, t_c, t_d);
    let value = match band {
        SpectrumBranch::ZeroPeriod => a_vg,
        SpectrumBranch::Ramp => a_vg * (1.0 + period / t_b * (eta * VERTICAL_AMPLIFICATION - 1.0)),
        SpectrumBranch::ConstantAcceleration => plateau,
        SpectrumBranch::ConstantVelocity => plateau * (t_c / period),
        SpectrumBranch::ConstantDisplacement => plateau * (t_c * t_d / period.powi(2)),
    };
    debug!(period, a_g, ?band, value, "vertical spectrum");
    Ok(value)
}

/// 스펙트럼 계산 시 사용하는 선택 입력값 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumOptions {
    pub ground_type: GroundType,
    pub spectrum_type: SpectrumType,
    /// 점성 감쇠비 ξ (%)
    pub damping_ratio_pct: f64,
    /// 거동계수 q
    pub behaviour_factor: f64,
    /// 설계스펙트럼 하한계수 β
    pub lower_bound_factor: f64,
}

impl Default for SpectrumOptions {
    fn default() -> Self {
        Self {
            ground_type: GroundType::B,
            spectrum_type: SpectrumType::Type2,
            damping_ratio_pct: DEFAULT_DAMPING_RATIO_PCT,
            behaviour_factor: 1.0,
            lower_bound_factor: 0.2,
        }
    }
}

impl SpectrumOptions {
    pub fn params(&self) -> SpectrumParams {
        self.ground_type.params(self.spectrum_type)
    }

    pub fn elastic(&self, period: f64, a_g: f64) -> Result<f64, SpectrumError> {
        elastic_ordinate(period, a_g, &self.params(), self.damping_ratio_pct)
    }

    pub fn design(&self, period: f64, a_g: f64) -> f64 {
        design_ordinate(
            period,
            a_g,
            &self.params(),
            self.behaviour_factor,
            self.lower_bound_factor,
        )
    }
}
