/// 将数值四舍五入到指定的小数位数
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimal_places.min(i32::MAX as u32) as i32);
    // 位数过大时 factor 溢出，直接返回原值
    if !factor.is_finite() {
        return value;
    }
    let rounded = (value * factor).round() / factor;
    // 避免显示 -0.000
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// 轴数值统一格式：固定3位小数，带符号对齐
pub fn format_axis(value: f64) -> String {
    format!("{:+.3}", value)
}

/// 判断数值的小数位数是否不超过 `decimal_places`
#[cfg(test)]
pub fn has_at_most_decimals(value: f64, decimal_places: u32) -> bool {
    let factor = 10f64.powi(decimal_places as i32);
    let scaled = value * factor;
    (scaled - scaled.round()).abs() < 1e-6
}
