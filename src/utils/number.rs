/// 四舍五入到两位小数
///
/// 先把放大后的值规整到 15 位有效数字，使 `1.005` 这类在二进制中
/// 略小于中点的值按十进制中点处理。
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * 100.0;
    let scaled: f64 = format!("{scaled:.14e}").parse().unwrap_or(scaled);
    scaled.round() / 100.0
}
