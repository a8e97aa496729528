use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 알 수 없는 물리량 이름
    #[error("지원하지 않는 물리량: {0}")]
    UnknownQuantity(String),
}

/// 물리량 이름 문자열을 해석한다.
pub fn parse_quantity(s: &str) -> Result<QuantityKind, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "stress" | "pressure" => Ok(QuantityKind::Stress),
        "acceleration" | "accel" => Ok(QuantityKind::Acceleration),
        "length" => Ok(QuantityKind::Length),
        "mass" => Ok(QuantityKind::Mass),
        "force" => Ok(QuantityKind::Force),
        _ => Err(ConversionError::UnknownQuantity(s.to_string())),
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `MPa`, `psi`, `g`, `m/s2`, `ft`, `t`, `kN` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Stress => {
            let from = parse_stress_unit(from_unit_str)?;
            let to = parse_stress_unit(to_unit_str)?;
            Ok(convert_stress(value, from, to))
        }
        QuantityKind::Acceleration => {
            let from = parse_acceleration_unit(from_unit_str)?;
            let to = parse_acceleration_unit(to_unit_str)?;
            Ok(convert_acceleration(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Force => {
            let from = parse_force_unit(from_unit_str)?;
            let to = parse_force_unit(to_unit_str)?;
            Ok(convert_force(value, from, to))
        }
    }
}

pub fn parse_stress_unit(s: &str) -> Result<StressUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(StressUnit::Pascal),
        "kpa" | "kilopascal" | "kn/m2" => Ok(StressUnit::KiloPascal),
        "mpa" | "megapascal" | "n/mm2" => Ok(StressUnit::MegaPascal),
        "gpa" | "gigapascal" | "kn/mm2" => Ok(StressUnit::GigaPascal),
        "psi" => Ok(StressUnit::Psi),
        "ksi" => Ok(StressUnit::Ksi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_acceleration_unit(s: &str) -> Result<AccelerationUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s2" | "m/s^2" | "m/s²" => Ok(AccelerationUnit::MeterPerSecondSquared),
        "g" => Ok(AccelerationUnit::StandardGravity),
        "gal" | "cm/s2" => Ok(AccelerationUnit::Gal),
        "ft/s2" | "ft/s^2" => Ok(AccelerationUnit::FootPerSecondSquared),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "t" | "tonne" => Ok(MassUnit::Tonne),
        "lb" | "lbs" | "lbm" => Ok(MassUnit::Pound),
        "kip" => Ok(MassUnit::Kip),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_force_unit(s: &str) -> Result<ForceUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "n" | "newton" => Ok(ForceUnit::Newton),
        "kn" => Ok(ForceUnit::KiloNewton),
        "mn" => Ok(ForceUnit::MegaNewton),
        "kgf" => Ok(ForceUnit::KilogramForce),
        "tf" => Ok(ForceUnit::TonneForce),
        "lbf" => Ok(ForceUnit::PoundForce),
        "kip" | "kipf" => Ok(ForceUnit::KipForce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
