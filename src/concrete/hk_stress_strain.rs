//! 홍콩 콘크리트 코드(Code of Practice for Structural Use of Concrete 2013, 2015 개정)의
//! 설계용 응력-변형률 곡선. 입력 강도 f_cu 는 큐브 강도(MPa)이다.

use tracing::debug;

/// 재료 부분안전계수 γ_m
pub const GAMMA_M: f64 = 1.5;
/// 일반 강도 콘크리트의 극한 변형률
pub const BASE_ULTIMATE_STRAIN: f64 = 0.0035;
/// 극한 변형률 저감이 시작되는 큐브 강도(MPa)
pub const HIGH_STRENGTH_THRESHOLD_MPA: f64 = 60.0;

/// 극한 변형률 e_cu. f_cu > 60 MPa 이면 제곱근 보정으로 감소한다.
pub fn ultimate_strain(f_cu: f64) -> f64 {
    if f_cu < HIGH_STRENGTH_THRESHOLD_MPA {
        BASE_ULTIMATE_STRAIN
    } else {
        BASE_ULTIMATE_STRAIN - 0.00006 * (f_cu - HIGH_STRENGTH_THRESHOLD_MPA).sqrt()
    }
}

/// 설계용 탄성계수(MPa).
pub fn elastic_modulus(f_cu: f64) -> f64 {
    1000.0 * (3.46 * (f_cu / GAMMA_M).sqrt() + 3.21)
}

/// 최대 응력 도달 변형률 e_c0. 탄성계수에 의존한다.
pub fn peak_strain(f_cu: f64) -> f64 {
    1.34 * f_cu / GAMMA_M / elastic_modulus(f_cu)
}

/// 설계 최대 응력 0.67 f_cu / γ_m (MPa).
pub fn peak_stress(f_cu: f64) -> f64 {
    0.67 * f_cu / GAMMA_M
}

/// 임의 변형률에 대한 콘크리트 응력(MPa)을 계산한다.
pub fn stress(strain: f64, f_cu: f64) -> f64 {
    ConcreteCurve::new(f_cu).stress_at(strain)
}

/// 응력-변형률 곡선이 어느 구간에 속하는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrainRegime {
    /// 변형률 ≤ 0 (인장 무시)
    NonPositive,
    /// 0 < ε < e_c0 포물선 구간
    Parabolic,
    /// e_c0 ≤ ε < e_cu 일정 응력 구간
    Plateau,
    /// ε ≥ e_cu 파괴 이후
    Crushed,
}

/// f_cu 하나로부터 세 임계값을 한 번에 계산해 둔 곡선.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcreteCurve {
    pub f_cu: f64,
    pub peak_strain: f64,
    pub ultimate_strain: f64,
    pub peak_stress: f64,
}

impl ConcreteCurve {
    pub fn new(f_cu: f64) -> Self {
        Self {
            f_cu,
            peak_strain: peak_strain(f_cu),
            ultimate_strain: ultimate_strain(f_cu),
            peak_stress: peak_stress(f_cu),
        }
    }

    /// 경계값은 바깥쪽 구간에 포함된다(상한은 strict `<`).
    pub fn regime(&self, strain: f64) -> StrainRegime {
        if strain <= 0.0 {
            StrainRegime::NonPositive
        } else if strain < self.peak_strain {
            StrainRegime::Parabolic
        } else if strain < self.ultimate_strain {
            StrainRegime::Plateau
        } else {
            StrainRegime::Crushed
        }
    }

    pub fn stress_at(&self, strain: f64) -> f64 {
        let regime = self.regime(strain);
        let ratio = match regime {
            StrainRegime::NonPositive | StrainRegime::Crushed => 0.0,
            StrainRegime::Parabolic => 1.0 - (strain / self.peak_strain - 1.0).powi(2),
            StrainRegime::Plateau => 1.0,
        };
        debug!(f_cu = self.f_cu, strain, ?regime, "concrete stress");
        self.peak_stress * ratio
    }

    /// 0 부터 e_cu 직전까지 균등 간격으로 (변형률, 응력) 점을 생성한다.
    /// 마지막 점은 e_cu 자체이므로 응력 0 으로 떨어진다.
    pub fn sample(&self, points: usize) -> Vec<(f64, f64)> {
        let n = points.max(2);
        let step = self.ultimate_strain / (n - 1) as f64;
        (0..n)
            .map(|i| {
                let strain = if i == n - 1 {
                    self.ultimate_strain
                } else {
                    step * i as f64
                };
                (strain, self.stress_at(strain))
            })
            .collect()
    }
}
