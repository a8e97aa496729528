use serde::{Deserialize, Serialize};

/// 표준 중력가속도(m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// 가속도 단위. 내부 기준은 m/s² 이다.
/// 지반가속도를 g 로 입력받는 경우가 많아 g 배수를 함께 지원한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccelerationUnit {
    MeterPerSecondSquared,
    StandardGravity,
    Gal,
    FootPerSecondSquared,
}

impl AccelerationUnit {
    pub const fn mps2_per_unit(self) -> f64 {
        match self {
            AccelerationUnit::MeterPerSecondSquared => 1.0,
            AccelerationUnit::StandardGravity => STANDARD_GRAVITY,
            // 1 Gal = 1 cm/s²
            AccelerationUnit::Gal => 0.01,
            AccelerationUnit::FootPerSecondSquared => 0.3048,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AccelerationUnit::MeterPerSecondSquared => "m/s²",
            AccelerationUnit::StandardGravity => "g",
            AccelerationUnit::Gal => "Gal",
            AccelerationUnit::FootPerSecondSquared => "ft/s²",
        }
    }
}

/// 가속도를 다른 단위로 변환한다.
pub fn convert_acceleration(value: f64, from: AccelerationUnit, to: AccelerationUnit) -> f64 {
    value * from.mps2_per_unit() / to.mps2_per_unit()
}
