//! 단위 정의 및 변환 모듈 모음. 모두 선형 환산이므로 기준 단위 배수로 처리한다.

pub mod acceleration;
pub mod force;
pub mod length;
pub mod mass;
pub mod stress;

pub use acceleration::{convert_acceleration, AccelerationUnit, STANDARD_GRAVITY};
pub use force::{convert_force, ForceUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use stress::{convert_stress, StressUnit};
