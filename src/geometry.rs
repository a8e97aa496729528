//! 간단한 기하 보조 함수.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 3차원 점.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Point3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

/// 정다각형 꼭짓점을 반환한다.
/// - centre 를 중심으로 z = centre.z 평면 위에 놓인다.
/// - 첫 꼭짓점은 각도 0(+x 방향)이며 반시계 방향으로 진행한다.
/// - 변의 수가 3 미만이면 3 으로 올린다.
pub fn n_gon(centre: Point3, radius: f64, n_sides: usize) -> Vec<Point3> {
    let n = n_sides.max(3);
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n as f64;
            Point3::new(
                centre.x + radius * angle.cos(),
                centre.y + radius * angle.sin(),
                centre.z,
            )
        })
        .collect()
}
