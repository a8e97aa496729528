use serde::{Deserialize, Serialize};

/// 응력 단위. 내부 기준은 MPa(= N/mm²)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    GigaPascal,
    Psi,
    Ksi,
}

impl StressUnit {
    /// 1 단위가 몇 MPa 인지.
    pub const fn mpa_per_unit(self) -> f64 {
        match self {
            StressUnit::Pascal => 1.0e-6,
            StressUnit::KiloPascal => 1.0e-3,
            StressUnit::MegaPascal => 1.0,
            StressUnit::GigaPascal => 1.0e3,
            StressUnit::Psi => 0.006_894_757,
            StressUnit::Ksi => 6.894_757,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            StressUnit::Pascal => "Pa",
            StressUnit::KiloPascal => "kPa",
            StressUnit::MegaPascal => "MPa",
            StressUnit::GigaPascal => "GPa",
            StressUnit::Psi => "psi",
            StressUnit::Ksi => "ksi",
        }
    }
}

/// 응력을 다른 단위로 변환한다.
pub fn convert_stress(value: f64, from: StressUnit, to: StressUnit) -> f64 {
    value * from.mpa_per_unit() / to.mpa_per_unit()
}
