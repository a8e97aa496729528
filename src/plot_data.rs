//! 차트에 그릴 데이터 계열을 만든다. 렌더링은 호출 측 몫이다.

use std::f64::consts::PI;

/// 하나의 x 축을 공유하는 세 곡선.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendSeries {
    /// (x, y1, y2, y3) 축 이름
    pub titles: [String; 4],
    pub x: Vec<f64>,
    pub sin: Vec<f64>,
    pub cos: Vec<f64>,
    pub blend: Vec<f64>,
}

pub const BLEND_SAMPLES: usize = 101;
const BLEND_STEP: f64 = 0.025;

/// sin(πx), cos(πx) 와 mu·cos(2πx) + (1-mu)·sin(πx) 를 x = 0 ~ 2.5 구간에서 계산한다.
pub fn sin_blend(mu: f64) -> BlendSeries {
    let x: Vec<f64> = (0..BLEND_SAMPLES).map(|i| BLEND_STEP * i as f64).collect();
    let sin = x.iter().map(|&v| (PI * v).sin()).collect();
    let cos = x.iter().map(|&v| (PI * v).cos()).collect();
    let blend = x
        .iter()
        .map(|&v| mu * (2.0 * PI * v).cos() + (1.0 - mu) * (PI * v).sin())
        .collect();
    BlendSeries {
        titles: [
            "x".to_string(),
            "sin(πx)".to_string(),
            "cos(πx)".to_string(),
            format!("{:4.2}cos(2πx) + {:4.2}sin(πx)", mu, 1.0 - mu),
        ],
        x,
        sin,
        cos,
        blend,
    }
}

/// 계열을 탭 구분 텍스트 표로 만든다.
pub fn to_table(series: &BlendSeries) -> String {
    let mut out = series.titles.join("\t");
    for i in 0..series.x.len() {
        out.push_str(&format!(
            "\n{:.3}\t{:.5}\t{:.5}\t{:.5}",
            series.x[i], series.sin[i], series.cos[i], series.blend[i]
        ));
    }
    out
}
