//! EN 1998-1(Eurocode 8) 지진 설계 계산 모듈 모음.
//! 지반 파라미터 테이블, 응답스펙트럼, 횡력법, 곡선 샘플링으로 구성한다.

pub mod base_shear;
pub mod ground_params;
pub mod response_spectrum;
pub mod spectrum_curve;

pub use base_shear::*;
pub use ground_params::*;
pub use response_spectrum::*;
