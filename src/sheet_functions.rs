//! 스프레드시트 함수 형태(스칼라/문자열 입력, 스칼라 출력)의 호출 표면.
//! 지반 라벨과 식 타입 번호를 그대로 받으며, 잘못된 키는 오류로 돌려준다.

use thiserror::Error;

use crate::concrete;
use crate::seismic::{
    self, horizontal_params, vertical_params, NationalAnnex, ParameterLookupError,
    SpectrumError, SpectrumParams, SpectrumType,
};

/// 셀 함수 호출 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SheetError {
    #[error(transparent)]
    Lookup(#[from] ParameterLookupError),
    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
}

/// 인자를 생략했을 때 쓰는 기본값.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetDefaults {
    pub soil: String,
    pub eqtype: u8,
    pub xi: f64,
    pub q: f64,
    pub beta: f64,
    pub lambda: f64,
}

impl Default for SheetDefaults {
    fn default() -> Self {
        Self {
            soil: "B".to_string(),
            eqtype: 2,
            xi: seismic::DEFAULT_DAMPING_RATIO_PCT,
            q: 1.0,
            beta: 0.2,
            lambda: 1.0,
        }
    }
}

impl SheetDefaults {
    /// 지반/감쇠비/식 타입을 기본값으로 채운 S_e(T).
    pub fn s_e(&self, t: f64, a_g: f64) -> Result<f64, SheetError> {
        ec8_s_e(t, a_g, &self.soil, self.xi, self.eqtype)
    }

    pub fn s_d(&self, t: f64, a_g: f64) -> Result<f64, ParameterLookupError> {
        ec8_s_d(t, a_g, self.q, &self.soil, self.eqtype, self.beta)
    }

    pub fn s_ve(&self, t: f64, a_g: f64) -> Result<f64, SheetError> {
        ec8_s_ve(t, a_g, self.xi, self.eqtype)
    }

    /// λ 를 생략한 F_b
    pub fn f_b(&self, s_d: f64, m: f64) -> f64 {
        ec8_f_b(s_d, m, self.lambda)
    }
}

/// HK 코드(2015) 콘크리트 응력. s = 변형률, f_cu = 큐브 강도(MPa)
pub fn hk_conc_stress(s: f64, f_cu: f64) -> f64 {
    concrete::stress(s, f_cu)
}

/// 감쇠 보정계수
pub fn ec8_eta(xi: f64) -> f64 {
    seismic::damping_correction(xi)
}

/// 국가부속서를 지정해 한 행 전체를 조회한다.
pub fn ec8_params(
    annex: NationalAnnex,
    soil: &str,
    eqtype: u8,
) -> Result<SpectrumParams, ParameterLookupError> {
    horizontal_params(annex, soil, eqtype)
}

fn recommended(soil: &str, eqtype: u8) -> Result<SpectrumParams, ParameterLookupError> {
    ec8_params(NationalAnnex::Recommended, soil, eqtype)
}

/// 3.2.2.2(2)P 지반계수 S
pub fn ec8_s(soil: &str, eqtype: u8) -> Result<f64, ParameterLookupError> {
    Ok(recommended(soil, eqtype)?.s)
}

/// 일정 가속도 구간 하한 T_B
pub fn ec8_t_b(soil: &str, eqtype: u8) -> Result<f64, ParameterLookupError> {
    Ok(recommended(soil, eqtype)?.t_b)
}

/// 일정 가속도 구간 상한 T_C
pub fn ec8_t_c(soil: &str, eqtype: u8) -> Result<f64, ParameterLookupError> {
    Ok(recommended(soil, eqtype)?.t_c)
}

/// 일정 변위 구간 시작 T_D
pub fn ec8_t_d(soil: &str, eqtype: u8) -> Result<f64, ParameterLookupError> {
    Ok(recommended(soil, eqtype)?.t_d)
}

/// 3.2.2.2 수평 탄성 응답스펙트럼
pub fn ec8_s_e(t: f64, a_g: f64, soil: &str, xi: f64, eqtype: u8) -> Result<f64, SheetError> {
    let params = recommended(soil, eqtype)?;
    Ok(seismic::elastic_ordinate(t, a_g, &params, xi)?)
}

/// 3.2.2.5 설계 스펙트럼. 감쇠비는 q 에 포함되므로 받지 않는다.
pub fn ec8_s_d(
    t: f64,
    a_g: f64,
    q: f64,
    soil: &str,
    eqtype: u8,
    beta: f64,
) -> Result<f64, ParameterLookupError> {
    let params = recommended(soil, eqtype)?;
    Ok(seismic::design_ordinate(t, a_g, &params, q, beta))
}

/// 3.2.2.3 수직 탄성 응답스펙트럼
pub fn ec8_s_ve(t: f64, a_g: f64, xi: f64, eqtype: u8) -> Result<f64, SheetError> {
    let spectrum_type = SpectrumType::try_from(eqtype)?;
    let params = vertical_params(NationalAnnex::Recommended, spectrum_type)?;
    Ok(seismic::vertical_ordinate(t, a_g, &params, xi)?)
}

/// 3.2.2.4(1) 설계 지반변위
pub fn ec8_d_g(a_g: f64, s: f64, t_c: f64, t_d: f64) -> f64 {
    seismic::design_ground_displacement(a_g, s, t_c, t_d)
}

/// 4.3.3.2.2(1)P 밑면전단력
pub fn ec8_f_b(s_d: f64, m: f64, lambda: f64) -> f64 {
    seismic::base_shear_force(s_d, m, lambda)
}

/// 4.3.3.2.2(3) 근사 고유주기
pub fn ec8_t_1(c_t: f64, h: f64) -> f64 {
    seismic::approximate_period(c_t, h)
}

// 워크북 예제 함수

pub fn hello(name: &str) -> String {
    format!("hello {name}")
}

/// 두 인자 합의 두 배
pub fn double_sum(x: f64, y: f64) -> f64 {
    2.0 * (x + y)
}

pub fn triple(x: f64) -> f64 {
    3.0 * x
}

/// 2차원 범위의 모든 셀에 1 을 더한다.
pub fn add_one(data: &[Vec<f64>]) -> Vec<Vec<f64>> {
    data.iter()
        .map(|row| row.iter().map(|cell| cell + 1.0).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workbook_demo_functions() {
        assert_eq!(hello("xlwings"), "hello xlwings");
        assert_eq!(double_sum(1.5, 2.5), 8.0);
        assert_eq!(triple(2.0), 6.0);
        assert_eq!(
            add_one(&[vec![1.0, 2.0], vec![3.0]]),
            vec![vec![2.0, 3.0], vec![4.0]]
        );
    }

    #[test]
    fn defaults_match_workbook_signatures() {
        let d = SheetDefaults::default();
        assert_eq!(d.soil, "B");
        assert_eq!(d.eqtype, 2);
        assert_eq!(ec8_s(&d.soil, d.eqtype), Ok(1.35));
        assert_eq!(d.f_b(2.0, 100.0), 200.0);
    }

    #[test]
    fn vertical_spectrum_lookup_succeeds() {
        // a_vg = 0.9 a_g, η = 1 → 평탄부 3.0 a_vg
        let v = ec8_s_ve(0.1, 1.0, 5.0, 1).unwrap();
        assert!((v - 2.7).abs() < 1e-12);
    }
}
