use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 t(= 1000 kg)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Tonne,
    Pound,
    Kip,
}

impl MassUnit {
    pub const fn tonnes_per_unit(self) -> f64 {
        match self {
            MassUnit::Kilogram => 0.001,
            MassUnit::Tonne => 1.0,
            MassUnit::Pound => 0.000_453_592,
            // 1 kip-mass = 1000 lb
            MassUnit::Kip => 0.453_592,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
            MassUnit::Pound => "lb",
            MassUnit::Kip => "kip",
        }
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    value * from.tonnes_per_unit() / to.tonnes_per_unit()
}
