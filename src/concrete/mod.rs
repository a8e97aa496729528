//! 콘크리트 재료 모델 모음.
//! 현재는 홍콩 콘크리트 코드(2013/2015)의 포물선-직사각형 응력-변형률 모델만 포함한다.

pub mod hk_stress_strain;

pub use hk_stress_strain::*;
