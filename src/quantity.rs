/// 변환기에서 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Stress,
    Acceleration,
    Length,
    Mass,
    Force,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::Stress,
        QuantityKind::Acceleration,
        QuantityKind::Length,
        QuantityKind::Mass,
        QuantityKind::Force,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Stress => "stress",
            QuantityKind::Acceleration => "acceleration",
            QuantityKind::Length => "length",
            QuantityKind::Mass => "mass",
            QuantityKind::Force => "force",
        }
    }
}
