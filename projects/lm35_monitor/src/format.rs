use micromath::F32Ext;

/// Renders a temperature with up to two fractional digits and at least one,
/// so `64.18`, `64.5`, `64.0` and `-3.3` come out the way the log readers
/// expect them.
pub fn format_celsius(value: f32) -> heapless::String<16> {
    let mut out: heapless::String<16> = heapless::String::new();
    let mut centi = (value * 100.0).round() as i32;
    if centi < 0 {
        out.push('-').unwrap();
        centi = -centi;
    }
    let whole = centi / 100;
    let frac = centi % 100;
    if frac % 10 == 0 {
        ufmt::uwrite!(out, "{}.{}", whole, frac / 10).unwrap();
    } else {
        ufmt::uwrite!(out, "{}.{}{}", whole, frac / 10, frac % 10).unwrap();
    }
    out
}
