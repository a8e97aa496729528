//! EN 1998-1 4.3.3.2 횡력법(lateral force method) 관련 식.
//! 질량 t, 가속도 m/s² 를 넣으면 밑면전단력은 kN 으로 나온다.

use tracing::{info, warn};

use super::ground_params::SpectrumParams;
use super::response_spectrum::design_ordinate;

/// 4.3.3.2.2(3) C_t: 철골 모멘트 골조
pub const CT_STEEL_MOMENT_FRAME: f64 = 0.085;
/// C_t: 콘크리트 모멘트 골조 / 편심 가새 철골 골조
pub const CT_CONCRETE_MOMENT_FRAME: f64 = 0.075;
/// C_t: 그 외 구조물
pub const CT_OTHER: f64 = 0.050;

/// 3.2.2.4(1) 설계 지반변위 d_g = 0.025 a_g S T_C T_D
pub fn design_ground_displacement(a_g: f64, s: f64, t_c: f64, t_d: f64) -> f64 {
    0.025 * a_g * s * t_c * t_d
}

/// 4.3.3.2.2(1)P 밑면전단력 F_b = S_d(T_1) m λ
pub fn base_shear_force(design_ordinate: f64, mass: f64, correction_factor: f64) -> f64 {
    design_ordinate * mass * correction_factor
}

/// 4.3.3.2.2(3) 근사 고유주기 T_1 = C_t H^(3/4). H 는 m.
pub fn approximate_period(c_t: f64, height_m: f64) -> f64 {
    c_t * height_m.powf(0.75)
}

/// 횡력법 입력.
#[derive(Debug, Clone)]
pub struct LateralForceInput {
    /// 설계 지반가속도 a_g (m/s²)
    pub a_g: f64,
    pub params: SpectrumParams,
    pub behaviour_factor: f64,
    pub lower_bound_factor: f64,
    /// 구조 형식 계수 C_t
    pub c_t: f64,
    /// 기초 또는 강체 지하층 상단부터의 건물 높이(m)
    pub height_m: f64,
    /// 지진 질량(t)
    pub mass_t: f64,
    /// 층수
    pub storeys: u32,
}

/// 횡력법 결과.
#[derive(Debug, Clone)]
pub struct LateralForceResult {
    pub period_s: f64,
    pub design_ordinate: f64,
    /// 보정계수 λ
    pub correction_factor: f64,
    pub base_shear_kn: f64,
    pub warnings: Vec<String>,
}

/// 4.3.3.2.2(1)P λ: T_1 ≤ 2T_C 이고 2층 초과이면 0.85, 그 외 1.0
pub fn correction_factor(period_s: f64, t_c: f64, storeys: u32) -> f64 {
    if period_s <= 2.0 * t_c && storeys > 2 {
        0.85
    } else {
        1.0
    }
}

/// 주기 → 설계스펙트럼 → λ → 밑면전단력 순으로 계산한다.
pub fn compute_lateral_force(input: LateralForceInput) -> LateralForceResult {
    let period_s = approximate_period(input.c_t, input.height_m);
    let s_d = design_ordinate(
        period_s,
        input.a_g,
        &input.params,
        input.behaviour_factor,
        input.lower_bound_factor,
    );
    let lambda = correction_factor(period_s, input.params.t_c, input.storeys);
    let base_shear_kn = base_shear_force(s_d, input.mass_t, lambda);

    let mut warnings = Vec::new();
    // 4.3.3.2.1(2)a
    let limit = (4.0 * input.params.t_c).min(2.0);
    if period_s > limit {
        warn!(period_s, limit, "lateral force method outside applicability");
        warnings.push(format!(
            "T_1 = {:.3} s 가 적용 한계 {:.3} s 를 초과합니다. 모드 해석을 검토하세요.",
            period_s, limit
        ));
    }
    info!(period_s, s_d, lambda, base_shear_kn, "lateral force computed");
    LateralForceResult {
        period_s,
        design_ordinate: s_d,
        correction_factor: lambda,
        base_shear_kn,
        warnings,
    }
}
