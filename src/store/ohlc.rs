use serde::{Deserialize, Serialize};

/// 一根 K 线：开盘、最高、最低、收盘价
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ohlc {
    pub open: f32,
    pub high: f32,
    pub low: f32,
    pub close: f32,
}

impl Ohlc {
    pub fn new(open: f32, high: f32, low: f32, close: f32) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }
}
