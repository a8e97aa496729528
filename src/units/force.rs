use serde::{Deserialize, Serialize};

/// 힘 단위. 내부 기준은 kN 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    KiloNewton,
    MegaNewton,
    KilogramForce,
    TonneForce,
    PoundForce,
    KipForce,
}

impl ForceUnit {
    pub const fn kn_per_unit(self) -> f64 {
        match self {
            ForceUnit::Newton => 0.001,
            ForceUnit::KiloNewton => 1.0,
            ForceUnit::MegaNewton => 1000.0,
            ForceUnit::KilogramForce => 0.009_806_65,
            ForceUnit::TonneForce => 9.806_65,
            ForceUnit::PoundForce => 0.004_448_222,
            ForceUnit::KipForce => 4.448_222,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::KiloNewton => "kN",
            ForceUnit::MegaNewton => "MN",
            ForceUnit::KilogramForce => "kgf",
            ForceUnit::TonneForce => "tf",
            ForceUnit::PoundForce => "lbf",
            ForceUnit::KipForce => "kip",
        }
    }
}

/// 힘을 다른 단위로 변환한다.
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    value * from.kn_per_unit() / to.kn_per_unit()
}
